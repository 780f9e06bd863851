//! Debug example showing varint layouts and decode errors

use tagwire::Buffer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();

    println!("Tagwire Debug Example");
    println!("=====================");

    for value in [0, -1, 1, -64, 64, 128, -129, i32::MAX, i32::MIN] {
        let mut buf = Buffer::new();
        buf.write_var_int(value);
        println!(
            "var_int {:>11} -> zigzag {:>10} -> {:?}",
            value,
            tagwire::zigzag_encode(value),
            buf.written()
        );
    }

    // Four continuation bytes and then nothing
    let mut buf = Buffer::from_slice(&[0x80, 0x80, 0x80, 0x80]);
    match buf.read_var_uint() {
        Ok(value) => println!("unexpected value {}", value),
        Err(e) => println!("truncated input: {}", e),
    }

    // Five continuation bytes
    let mut buf = Buffer::from_slice(&[0xFF; 6]);
    match buf.read_var_uint() {
        Ok(value) => println!("unexpected value {}", value),
        Err(e) => println!("runaway varint: {}", e),
    }

    Ok(())
}
