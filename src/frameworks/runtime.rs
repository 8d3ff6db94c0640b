// Framework bootstrap for the simulation runtime.

use crate::domain::{Arena, Renderer};
use crate::frameworks::config::{self, LogFormat, RenderFormat};
use crate::interface_adapters::render::{ChannelRenderer, TracingRenderer, render_event_writer};
use crate::use_cases::{LoopSettings, Simulation, SimulationSettings, simulation_task};

use std::{io::Result, sync::Arc};
use tokio::sync::{Notify, broadcast};
use tracing_subscriber::EnvFilter;

/// Installs the stderr subscriber; stdout is reserved for the JSON render stream.
fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Json => subscriber.json().with_current_span(true).init(),
        LogFormat::Compact => subscriber.compact().init(),
    }

    std::panic::set_hook(Box::new(|info| {
        let location = info.location().map(|l| l.to_string()).unwrap_or_default();
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, %location, %backtrace, "simulation panicked");
    }));
}

/// Runs a simulation sized to the renderer's arena until `shutdown` is notified.
pub async fn run<D>(
    renderer: D,
    settings: SimulationSettings,
    loop_settings: LoopSettings,
    shutdown: Arc<Notify>,
) -> Simulation
where
    D: Renderer,
{
    // Arena bounds are read once and fixed for the lifetime of the simulation.
    let arena = renderer.arena();
    tracing::info!(
        width = arena.width,
        height = arena.height,
        count_per_type = settings.tuning.initial_count_per_type,
        win_rule = ?settings.win_rule,
        tick_interval_ms = loop_settings.tick_interval.as_millis(),
        "starting simulation"
    );

    let simulation = Simulation::new(arena, settings);
    simulation_task(simulation, renderer, loop_settings, shutdown).await
}

pub async fn run_with_config() -> Result<()> {
    // A missing `.env` is fine; the environment and defaults still apply.
    let _ = dotenvy::dotenv();
    init_tracing(config::log_format());

    let arena = Arena::new(config::arena_width(), config::arena_height());
    let settings = SimulationSettings {
        tuning: config::particle_tuning(),
        win_rule: config::win_rule(),
    };
    let loop_settings = LoopSettings {
        tick_interval: config::tick_interval(),
        announce_delay: config::announce_delay(),
    };
    let shutdown = Arc::new(Notify::new());

    let mut writer = None;
    let simulation = match config::render_format() {
        RenderFormat::Log => tokio::spawn(run(
            TracingRenderer::new(arena),
            settings,
            loop_settings,
            shutdown.clone(),
        )),
        RenderFormat::Json => {
            let (events_tx, events_rx) = broadcast::channel(config::render_channel_capacity());
            // Serialize render events off the tick path.
            writer = Some(tokio::spawn(render_event_writer(
                events_rx,
                tokio::io::stdout(),
            )));
            tokio::spawn(run(
                ChannelRenderer::new(arena, events_tx),
                settings,
                loop_settings,
                shutdown.clone(),
            ))
        }
    };

    let signal = tokio::signal::ctrl_c().await;
    shutdown.notify_one();

    let simulation = simulation.await.map_err(std::io::Error::other)?;
    // The renderer dropped with the simulation task, closing the event channel.
    if let Some(writer) = writer {
        writer.await.map_err(std::io::Error::other)?;
    }
    tracing::info!(
        ticks = simulation.ticks(),
        resets = simulation.resets(),
        "simulation finished"
    );

    signal.inspect_err(|e| {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    })
}
