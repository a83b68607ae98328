pub mod app;
pub mod event;
pub mod layout;

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::{AppContext, Result};
use crate::domain::FeedSelector;

use self::app::TuiApp;
use self::event::{Action, AppEvent, EventHandler};

type Tui = Terminal<CrosstermBackend<Stdout>>;

pub async fn run(ctx: Arc<AppContext>, selector: FeedSelector) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, ctx, selector).await;
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app(terminal: &mut Tui, ctx: Arc<AppContext>, selector: FeedSelector) -> Result<()> {
    let mut tui_app = TuiApp::new(ctx.config.feeds.sources(), selector);
    let event_handler = EventHandler::new(Duration::from_millis(100));

    ctx.spawn_pass(tui_app.selector.clone());

    loop {
        sync_edition(&mut tui_app, &ctx).await;
        terminal.draw(|frame| layout::render(frame, &tui_app, &ctx.config.colors))?;

        match event_handler.next()? {
            AppEvent::Key(key) => {
                let action = ctx.config.keybindings.get_action(&key);
                match action {
                    Action::Quit => {
                        tui_app.should_quit = true;
                    }
                    Action::NextStory => {
                        tui_app.move_down();
                    }
                    Action::PrevStory => {
                        tui_app.move_up();
                    }
                    Action::NextSource => {
                        ctx.spawn_pass(tui_app.next_source());
                    }
                    Action::PrevSource => {
                        ctx.spawn_pass(tui_app.prev_source());
                    }
                    Action::ToggleTop => {
                        ctx.spawn_pass(tui_app.toggle_top());
                    }
                    Action::Refresh => {
                        ctx.spawn_pass(tui_app.refresh());
                    }
                    Action::OpenStory => {
                        if let Some(story) = tui_app.selected_story() {
                            let href = story.href.clone();
                            if let Err(e) = open::that(&href) {
                                tui_app.set_status(format!("Failed to open browser: {}", e));
                            } else {
                                tui_app.set_status(format!("Opened {}", href));
                            }
                        }
                    }
                    Action::None => {}
                }
            }
            AppEvent::Tick => {}
        }

        if tui_app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Pull the board's latest edition and loading flag into the view.
async fn sync_edition(tui_app: &mut TuiApp, ctx: &AppContext) {
    tui_app.is_loading = ctx.board.is_loading().await;
    if let Some(edition) = ctx.board.current().await {
        tui_app.apply_edition(edition);
    }
}
