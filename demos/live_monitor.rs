//! Real-time telemetry monitoring example
//!
//! Run with: cargo run --example live_monitor

use std::time::Duration;

use pinecil_rust_ble::{BleTransport, Pinecil, Result};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging (minimal)
    tracing_subscriber::fmt().with_env_filter("warn").init();

    println!("Pinecil Live Monitor");
    println!("====================\n");
    println!("Scanning for a Pinecil...\n");

    let Some(pinecil) = Pinecil::discover(Duration::from_secs(10)).await? else {
        println!("No Pinecil found. Is BLE enabled on the iron?");
        return Ok(());
    };

    let info = pinecil.get_device_info().await?;
    println!(
        "Found {} (IronOS {}, SN {})",
        info.name.as_deref().unwrap_or(&info.address),
        info.build.as_deref().unwrap_or("?"),
        info.device_sn.as_deref().unwrap_or("?"),
    );
    println!("Press Ctrl+C to exit.\n");

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                println!("\nExiting...");
                break;
            }
            _ = tokio::time::sleep(Duration::from_millis(500)) => {
                display_live_data(&pinecil).await;
            }
        }
    }

    pinecil.disconnect().await
}

async fn display_live_data(pinecil: &Pinecil<BleTransport>) {
    let live = match pinecil.get_live_data().await {
        Ok(live) => live,
        Err(error) => {
            println!("Read failed: {error}");
            return;
        }
    };

    // Clear screen and move cursor to top
    print!("\x1B[2J\x1B[1;1H");

    println!("=== Pinecil Live Monitor ===");
    println!("Mode:       {:?}", live.operating_mode);
    println!("Tip:        {}°C (set {}°C)", live.live_temp, live.setpoint_temp);
    println!("Handle:     {:.1}°C", live.handle_temp);
    println!("Power:      {:.1} W ({}% PWM)", live.estimated_power, live.pwm_level);
    println!(
        "Input:      {:.1} V via {:?}",
        live.dc_voltage, live.power_src
    );
    println!("Tip:        {:.1} Ω, {} mV raw", live.tip_resistance, live.tip_voltage);
    println!("Uptime:     {:.0} s", live.uptime);
    println!("Last moved: {:.0} s ago", live.movement_time);
    println!("\nPress Ctrl+C to exit");
}
