use anyhow::{bail, Context, Result};
use balloon_words::balloons::{acknowledge_game_over, handle_click, process_tick, restart};
use balloon_words::build_info;
use balloon_words::core::logging::init_file_logging;
use balloon_words::ui::{canvas_is_drawable, cell_to_canvas, render_balloon_game};
use balloon_words::{BalloonGame, ClickEvent, GameConfig, RepeatingTask};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
    MouseEvent, MouseEventKind,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::layout::Rect;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Input poll timeout while the ticker is stopped.
const IDLE_POLL: Duration = Duration::from_millis(250);

type Tui = Terminal<CrosstermBackend<Stdout>>;

#[derive(Debug, Default, PartialEq)]
struct Options {
    config_path: Option<PathBuf>,
    log_path: Option<PathBuf>,
    seed: Option<u64>,
    dump_config: bool,
}

#[derive(Debug, PartialEq)]
enum Command {
    Play(Options),
    Help,
    Version,
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let options = match parse_args(&args)? {
        Command::Play(options) => options,
        Command::Help => {
            print_help();
            return Ok(());
        }
        Command::Version => {
            println!("{}", build_info::version_line());
            return Ok(());
        }
    };

    if let Some(path) = &options.log_path {
        init_file_logging(path, tracing::Level::DEBUG)
            .with_context(|| format!("could not open log file {}", path.display()))?;
    }

    let config = match &options.config_path {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("could not load config {}", path.display()))?,
        None => GameConfig::default(),
    };

    if options.dump_config {
        println!("{}", config.to_json_pretty()?);
        return Ok(());
    }

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, config, &mut rng);
    restore_terminal(&mut terminal)?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "game stopped");
    }
    result
}

fn parse_args(args: &[String]) -> Result<Command> {
    let mut options = Options::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-v" => return Ok(Command::Version),
            "--dump-config" => options.dump_config = true,
            flag @ ("--config" | "-c" | "--log" | "--seed" | "-s") => {
                let Some(value) = args.get(i + 1) else {
                    bail!("{} needs a value", flag);
                };
                match flag {
                    "--config" | "-c" => options.config_path = Some(PathBuf::from(value)),
                    "--log" => options.log_path = Some(PathBuf::from(value)),
                    _ => {
                        let seed = value
                            .parse()
                            .with_context(|| format!("invalid seed: {}", value))?;
                        options.seed = Some(seed);
                    }
                }
                i += 1;
            }
            other => bail!("unknown argument: {} (run 'balloon-words --help')", other),
        }
        i += 1;
    }

    Ok(Command::Play(options))
}

fn print_help() {
    println!("Balloon Words - pop the balloon that matches the definition\n");
    println!("Usage: balloon-words [options]\n");
    println!("Options:");
    println!("  -c, --config <path>  Load game settings from a JSON file");
    println!("      --log <path>     Append debug logs to a file");
    println!("      --dump-config    Print the effective settings as JSON and exit");
    println!("  -s, --seed <n>       Seed the random generator");
    println!("  -v, --version        Show version information");
    println!("  -h, --help           Show this help message");
}

fn setup_terminal() -> io::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal(terminal: &mut Tui) -> io::Result<()> {
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()
}

fn run(terminal: &mut Tui, config: GameConfig, rng: &mut StdRng) -> Result<()> {
    let mut game = BalloonGame::new(config, rng);
    let mut ticker = RepeatingTask::new(game.config.tick_interval());
    let mut canvas_area = Rect::default();
    let mut last_event: Option<ClickEvent> = None;

    terminal.draw(|frame| {
        let area = frame.size();
        canvas_area = render_balloon_game(frame, area, &game, None);
    })?;
    if !canvas_is_drawable(canvas_area) {
        bail!("terminal is too small to draw the balloon canvas");
    }

    tracing::info!(word = game.target.word, "game started");
    ticker.start(Instant::now());

    loop {
        let timeout = ticker
            .time_until_next(Instant::now())
            .unwrap_or(IDLE_POLL);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => break,
                    _ if game.pending_notice.is_some() => {
                        acknowledge_game_over(&mut game);
                        ticker.start(Instant::now());
                    }
                    KeyCode::Char('r') | KeyCode::Char('R') => {
                        restart(&mut game, rng);
                        last_event = None;
                    }
                    _ => {}
                },
                Event::Mouse(MouseEvent {
                    kind: MouseEventKind::Down(MouseButton::Left),
                    column,
                    row,
                    ..
                }) => {
                    let point = cell_to_canvas(canvas_area, column, row, &game.config);
                    if game.pending_notice.is_some() {
                        acknowledge_game_over(&mut game);
                        ticker.start(Instant::now());
                    } else if let Some((x, y)) = point {
                        let events = handle_click(&mut game, x, y, rng);
                        if let Some(event) = events.into_iter().last() {
                            last_event = Some(event);
                        }
                        // Freeze the new game behind the notice until it is dismissed
                        if game.pending_notice.is_some() {
                            ticker.cancel();
                        }
                    }
                }
                _ => {}
            }
        }

        // A collapsed canvas has nowhere to draw; hold the balloons still
        let due = ticker.poll(Instant::now());
        if canvas_is_drawable(canvas_area) {
            for _ in 0..due {
                process_tick(&mut game);
            }
        }

        terminal.draw(|frame| {
            let area = frame.size();
            canvas_area = render_balloon_game(frame, area, &game, last_event.as_ref());
        })?;
    }

    ticker.cancel();
    tracing::info!(
        score = game.score,
        games = game.games_played,
        best = game.best_score,
        "quit"
    );
    Ok(())
}
