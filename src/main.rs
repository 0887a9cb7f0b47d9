//! LuckSpin demo entry point
//!
//! Drives complete login -> draw -> landing cycles for a few demo
//! participants at the fixed timestep and prints each result.

use luckspin::app::{App, AppEvent};
use luckspin::config::WheelConfig;
use luckspin::consts::SIM_DT;
use luckspin::roster::Roster;

fn now_ms() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as f64)
        .unwrap_or(0.0)
}

fn main() {
    env_logger::init();

    let config = WheelConfig::default();
    if let Some(warning) = config.weight_warning() {
        log::warn!("Sector weights sum to {:.2}, not 100", warning.total_weight);
    }

    let mut roster = Roster::new();
    roster.import_lines("Demo User 1\nDemo User 2\nHouse Account\n");
    if let Err(err) = roster.set_privileged("House Account") {
        log::error!("Failed to flag house account: {err}");
    }

    let mut app = App::new(config, roster, now_ms() as u64);

    for name in ["Demo User 1", "Demo User 2", "House Account"] {
        if let Err(err) = app.login(name) {
            log::error!("{name}: {err}");
            continue;
        }
        match app.start_spin(now_ms()) {
            Ok(true) => {}
            Ok(false) => continue,
            Err(err) => {
                log::error!("{name}: {err}");
                continue;
            }
        }

        // Fixed-timestep run until the wheel settles
        loop {
            if let Some(AppEvent::SpinFinished) = app.tick(SIM_DT) {
                break;
            }
        }

        match app.winning_sector() {
            Some(sector) => println!(
                "{name} -> {} (wheel resting at {:.1} deg)",
                sector.name,
                app.animator.rotation().rem_euclid(360.0)
            ),
            None => log::error!("{name}: spin finished without a winner"),
        }
        app.reset();
    }
}
