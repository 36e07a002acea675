//! # pumpkitd — pumpkit daemon
//!
//! Composition root that wires the pump controller, the mode selector,
//! and the virtual adapter together, then runs until shutdown.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Initialise tracing
//! - Construct the event bus, observer, controller, and selector
//! - Optionally run one scripted demo cycle
//! - Handle graceful shutdown (ctrl-c)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::time::Duration;

use anyhow::Context as _;
use tracing_subscriber::EnvFilter;

use pumpkit_adapter_virtual::{AttributeTable, VirtualSensor};
use pumpkit_app::controller::PumpController;
use pumpkit_app::event_bus::{EventBusObserver, InProcessEventBus};
use pumpkit_app::mode_selector::ModeSelector;
use pumpkit_app::ports::ActuatorObserver;
use pumpkit_domain::state::{Actor, PumpAction, PumpState};

use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let endpoint = config.endpoint();

    // Event bus
    let bus = InProcessEventBus::new(256);
    let observer = EventBusObserver::new(bus.clone(), endpoint);

    // Actuator
    let controller =
        PumpController::new(config.pump_config(), observer).context("creating pump controller")?;

    // Mode selection against the virtual adapter
    let sensor = VirtualSensor::new(config.mode.sensor);
    let attributes = AttributeTable::with_endpoints([endpoint]);
    let selector = ModeSelector::new(endpoint, config.mode.sensorless, sensor, attributes);
    selector.init().await;

    tracing::info!(
        %endpoint,
        control_mode = %selector.control_mode(),
        "pumpkitd started"
    );

    // Log everything the actuator does.
    let mut events = bus.subscribe();
    tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            tracing::info!(
                event_type = ?event.event_type,
                data = %event.data,
                "actuator event"
            );
        }
    });

    if config.demo.enabled {
        run_demo_cycle(&controller).await;
    }

    tokio::signal::ctrl_c()
        .await
        .context("waiting for shutdown signal")?;
    tracing::info!("pumpkitd shutting down");
    Ok(())
}

/// One scripted start/stop cycle so a bare daemon shows some life.
///
/// Starts the pump, waits for it to settle, then either waits for the
/// configured auto-stop or stops it manually after a short run.
async fn run_demo_cycle<O>(controller: &PumpController<O>)
where
    O: ActuatorObserver + Send + Sync + 'static,
{
    tracing::info!("demo cycle: starting the pump");
    if !controller.request_action(Actor::Local, PumpAction::Start) {
        tracing::warn!("demo cycle: start rejected");
        return;
    }
    while controller.is_transitioning() {
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    if controller.is_auto_stop_armed() {
        tracing::info!("demo cycle: waiting for the unattended auto-stop");
        while controller.state() != PumpState::Stopped {
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
    } else {
        tokio::time::sleep(Duration::from_secs(2)).await;
        if controller.request_action(Actor::Local, PumpAction::Stop) {
            while controller.is_transitioning() {
                tokio::time::sleep(Duration::from_millis(50)).await;
            }
        }
    }

    tracing::info!(state = %controller.state(), "demo cycle complete");
}
