//! Basic usage example for Tagwire

use tagwire::{Buffer, Decode, Encode, Result, TaggedReader, TaggedWriter};

/// A fixed-shape record: every field, in order, no tags
#[derive(Debug, Clone, PartialEq)]
struct Position {
    x: i32,
    y: i32,
}

impl Encode for Position {
    fn encode(&self, buf: &mut Buffer) -> Result<()> {
        buf.write_var_int(self.x);
        buf.write_var_int(self.y);
        Ok(())
    }
}

impl Decode for Position {
    fn decode(buf: &mut Buffer) -> Result<Self> {
        Ok(Position {
            x: buf.read_var_int()?,
            y: buf.read_var_int()?,
        })
    }
}

/// A tagged message: only present fields go on the wire
#[derive(Debug, Default, PartialEq)]
struct PlayerUpdate {
    player_id: Option<u32>,
    name: Option<String>,
    position: Option<Position>,
    health: Option<f32>,
}

impl Encode for PlayerUpdate {
    fn encode(&self, buf: &mut Buffer) -> Result<()> {
        let mut fields = TaggedWriter::new(buf);
        fields.field(1, self.player_id.as_ref(), |b, v| b.write_var_uint(*v));
        fields.field(2, self.name.as_deref(), |b, v| b.write_string(v));
        fields.message(3, self.position.as_ref())?;
        fields.field(4, self.health.as_ref(), |b, v| b.write_low_precision_float(*v));
        fields.finish();
        Ok(())
    }
}

impl Decode for PlayerUpdate {
    fn decode(buf: &mut Buffer) -> Result<Self> {
        let mut result = PlayerUpdate::default();
        let mut fields = TaggedReader::new(buf, "PlayerUpdate");
        while let Some(tag) = fields.next_tag()? {
            match tag {
                1 => result.player_id = Some(fields.buffer().read_var_uint()?),
                2 => result.name = Some(fields.buffer().read_string()?),
                3 => result.position = Some(fields.buffer().read_message()?),
                4 => result.health = Some(fields.buffer().read_low_precision_float()?),
                _ => return Err(fields.unknown_field(tag)),
            }
        }
        Ok(result)
    }
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("Tagwire Basic Usage Example");
    println!("===========================");

    let update = PlayerUpdate {
        player_id: Some(42),
        position: Some(Position { x: -3, y: 200 }),
        health: Some(87.5),
        ..PlayerUpdate::default()
    };

    let bytes = tagwire::to_bytes(&update)?;
    println!("Serialized message: {} bytes", bytes.len());
    println!("   Bytes: {:?}", bytes);

    let decoded: PlayerUpdate = tagwire::from_bytes(&bytes)?;
    println!("\nDecoded message:");
    println!("   Player: {:?}", decoded.player_id);
    println!("   Name: {:?}", decoded.name);
    println!("   Position: {:?}", decoded.position);
    println!("   Health: {:?}", decoded.health);

    assert_eq!(decoded, update);
    println!("\nRoundtrip OK");

    Ok(())
}
