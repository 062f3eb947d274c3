//! Life Cube desktop widget
//!
//! Shows an idle or a busy animation depending on whether the local
//! calendar has an event in progress.

use std::sync::Arc;

use application::{AnimationPlayer, ScheduleEvaluator, load_frames_or_placeholder};
use infrastructure::{
    AppConfig, HeadlessSurface, IcsCalendarAdapter, ImageFrameLoader, SystemClock, WidgetRuntime,
    init_logging,
};
use tokio::signal;
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    // Logging is not up yet, so config problems are reported after init
    let (config, config_problem) = match AppConfig::load() {
        Ok(config) => match config.validate() {
            Ok(()) => (config, None),
            Err(e) => (AppConfig::default(), Some(e.to_string())),
        },
        Err(e) => (AppConfig::default(), Some(e.to_string())),
    };

    init_logging(&config.logging)?;

    if let Some(problem) = config_problem {
        warn!(error = %problem, "Invalid configuration, using defaults");
    }

    info!(
        calendar = %config.calendar.path_string(),
        idle = %config.assets.idle_string(),
        busy = %config.assets.busy_string(),
        "Starting Life Cube"
    );

    let loader = ImageFrameLoader::new();
    let (width, height) = (config.surface.width, config.surface.height);
    let idle = load_frames_or_placeholder(&loader, &config.assets.idle, width, height)?;
    let busy = load_frames_or_placeholder(&loader, &config.assets.busy, width, height)?;

    let evaluator = ScheduleEvaluator::new(
        Arc::new(IcsCalendarAdapter::new(config.calendar.path.clone())),
        Arc::new(SystemClock),
    );
    let surface = HeadlessSurface::new(config.surface.title.clone(), width, height);
    let player = AnimationPlayer::new(
        evaluator,
        idle,
        busy,
        Box::new(surface),
        config.timing.frame_interval(),
    );
    let widget = WidgetRuntime::new(player, config.timing.poll_interval());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let player = runtime.block_on(widget.run_until(shutdown_signal()));

    info!(last_status = ?player.active_status(), "Life Cube closed");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, closing widget");
        }
        () = terminate => {
            info!("Received SIGTERM, closing widget");
        }
    }
}
