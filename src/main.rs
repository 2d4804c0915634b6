use anyhow::Context;
use clap::Parser;

use itemflow::backend::DataStore;
use itemflow::cli::{Cli, Command};
use itemflow::effects::ItemEffects;
use itemflow::items::ItemsReducer;
use itemflow::logging::{init_file_tracing, init_stderr_tracing};
use itemflow::router::Route;
use itemflow::runtime::Store;
use itemflow::shutdown::ShutdownCoordinator;
use itemflow::ui::app::App;
use itemflow::ui::{oneshot, runtime};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let command = cli.command();

    match command {
        Command::Repl => init_file_tracing(),
        _ => init_stderr_tracing(),
    }

    let config = cli.load_config().context("Failed to load configuration")?;
    tracing::info!(
        records = config.backend.seed.len(),
        load_delay_ms = config.timing.load_delay_ms,
        update_delay_ms = config.timing.update_delay_ms,
        "Starting itemflow"
    );

    let shutdown = ShutdownCoordinator::new();
    let signal_handle = shutdown.handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            signal_handle.signal();
        }
    });

    let backend = DataStore::from_config(&config.backend);
    let effects = ItemEffects::new(backend, &config);
    let store = Store::<ItemsReducer>::spawn(effects, shutdown.handle());

    let (store, result) = match command {
        Command::Repl => {
            let mut app = App::new(store, Route::List);
            let result = runtime::run(&mut app, shutdown.handle())
                .await
                .context("Shell I/O failed");
            (app.into_store(), result)
        }
        Command::List => {
            let result = print_result(oneshot::show_list(&store), &shutdown).await;
            (store, result)
        }
        Command::Show { id } => {
            let result = print_result(oneshot::show_item(&store, id), &shutdown).await;
            (store, result)
        }
        Command::Update { id } => {
            let result = print_result(oneshot::update_item(&store, id), &shutdown).await;
            (store, result)
        }
    };

    shutdown.signal();
    store.stopped().await;
    result
}

async fn print_result<F>(request: F, shutdown: &ShutdownCoordinator) -> anyhow::Result<()>
where
    F: std::future::Future<Output = Result<String, oneshot::OneShotError>>,
{
    let handle = shutdown.handle();
    tokio::select! {
        result = request => {
            print!("{}", result?);
            Ok(())
        }
        _ = handle.wait() => {
            tracing::info!("Interrupted");
            Ok(())
        }
    }
}
