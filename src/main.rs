use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event as TermEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use gh_activity::adapters::github::GithubClient;
use gh_activity::app::Command;
use gh_activity::cli::CliArgs;
use gh_activity::config::Config;
use gh_activity::domain::Event;
use gh_activity::ports::ActivitySource;
use gh_activity::report::print_report;
use gh_activity::services::activity_service::ActivityService;
use gh_activity::tui::{SearchForm, TuiMessage, TuiModel, TuiUpdate, TuiView};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info};

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so they can be redirected away from the UI
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli_args = CliArgs::parse();
    let config = Config::from_cli_and_file(&cli_args)?;
    info!("Using API base URL {}", config.api_base_url);

    let client = GithubClient::new(config.api_base_url.clone(), &config.user_agent)
        .context("Failed to build HTTP client")?;

    if cli_args.print {
        let username = cli_args.username.unwrap_or_default();
        let mut stdout = io::stdout();
        let loaded = print_report(&client, &username, config.ui.page_size, &mut stdout).await?;
        stdout.flush()?;
        if !loaded {
            // The banner is already on stdout
            std::process::exit(1);
        }
        return Ok(());
    }

    run_tui(Arc::new(client), &config, cli_args.username).await
}

async fn run_tui(
    source: Arc<dyn ActivitySource>,
    config: &Config,
    initial_username: Option<String>,
) -> Result<()> {
    info!("Starting gh-activity");

    let (mut service, event_rx, command_tx) = ActivityService::new(source);
    let service_handle = tokio::spawn(async move { service.run().await });

    let mut model = TuiModel::new(&config.ui);
    if let Some(username) = initial_username {
        model.form = SearchForm::with_text(username);
        if let TuiMessage::Command(cmd) = TuiUpdate::submit_form(&mut model) {
            command_tx.send(cmd).context("Activity service stopped")?;
        }
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run_main_loop(&mut model, &mut terminal, event_rx, &command_tx).await;

    shutdown(&mut terminal)?;

    // Closing the channel stops the service if Quit was never delivered
    drop(command_tx);
    match service_handle.await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => error!("Activity service failed: {}", e),
        Err(e) => error!("Activity service task failed: {:?}", e),
    }

    if let Err(e) = &result {
        error!("Application error: {}", e);
    }

    info!("gh-activity shut down cleanly");
    result
}

/// Main UI loop - applies service events and forwards key input
async fn run_main_loop(
    model: &mut TuiModel,
    terminal: &mut Tui,
    mut event_rx: mpsc::UnboundedReceiver<Event>,
    command_tx: &mpsc::UnboundedSender<Command>,
) -> Result<()> {
    let mut needs_redraw = true;

    loop {
        while let Ok(event) = event_rx.try_recv() {
            model.apply_event(&event);
            needs_redraw = true;
        }

        if model.should_quit {
            info!("Quit requested, exiting main loop");
            break;
        }

        if needs_redraw {
            terminal.draw(|frame| TuiView::render(model, frame))?;
            needs_redraw = false;
        }

        if event::poll(Duration::from_millis(10))? {
            match event::read()? {
                TermEvent::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    let message = TuiUpdate::handle_key(model, key_event.code, key_event.modifiers)?;
                    if let TuiMessage::Command(cmd) = message {
                        info!("Sending command to activity service: {:?}", cmd);
                        if matches!(cmd, Command::Quit) {
                            model.should_quit = true;
                        }
                        if let Err(e) = command_tx.send(cmd) {
                            error!("Failed to send command: {}", e);
                        }
                    }
                    needs_redraw = true;
                }
                TermEvent::Resize(_, _) => needs_redraw = true,
                _ => {}
            }
        }

        // Yield so spawned loads make progress on this runtime
        tokio::time::sleep(Duration::from_millis(1)).await;
    }

    Ok(())
}

fn shutdown(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
