use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::io;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use layertree::config::Config;
use layertree::{
    DepthLimit, Outcome, PanelController, PluginSession, RenderOptions, SceneDocument,
};

fn cli() -> Command {
    let scene_arg = Arg::new("scene")
        .help("Scene dump (JSON) with the current page and selection")
        .required(true)
        .value_parser(clap::value_parser!(PathBuf))
        .index(1);
    let config_arg = Arg::new("config")
        .long("config")
        .help("Config file with default options")
        .value_parser(clap::value_parser!(PathBuf))
        .global(true);
    let verbose_arg = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help("Log debug output to stderr")
        .action(ArgAction::SetTrue)
        .global(true);

    Command::new("layertree")
        .about("Render a design document's layer hierarchy as a text tree")
        .subcommand_required(true)
        .arg(config_arg)
        .arg(verbose_arg)
        .subcommand(
            Command::new("render")
                .about("Print the layer tree of the selection, or of the current page")
                .arg(scene_arg.clone())
                .arg(
                    Arg::new("max-depth")
                        .short('d')
                        .long("max-depth")
                        .help("Levels to descend below the root (-1 for all, 0 for the root only)")
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(i64)),
                )
                .arg(
                    Arg::new("types")
                        .short('t')
                        .long("types")
                        .help("Append each layer's type in parentheses")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("serve")
                .about("Answer panel messages (newline-delimited JSON) on stdin/stdout")
                .arg(scene_arg),
        )
}

fn init_logging(verbose: bool) {
    let default = if verbose { "layertree=debug" } else { "layertree=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn render_options(matches: &ArgMatches, config: &Config) -> Result<RenderOptions> {
    let mut options = config.render_options()?;
    if let Some(&depth) = matches.get_one::<i64>("max-depth") {
        options.max_depth = DepthLimit::try_from(depth)?;
    }
    if matches.get_flag("types") {
        options.show_types = true;
    }
    Ok(options)
}

fn load_scene(matches: &ArgMatches) -> Result<SceneDocument> {
    let path = matches
        .get_one::<PathBuf>("scene")
        .context("missing scene argument")?;
    let scene = SceneDocument::from_path(path)
        .with_context(|| format!("Failed to load scene from {:?}", path))?;
    debug!(selected = scene.selected_ids().len(), "scene loaded from {:?}", path);
    Ok(scene)
}

fn run_render(matches: &ArgMatches, config: &Config) -> Result<()> {
    let options = render_options(matches, config)?;
    let session = PluginSession::new(load_scene(matches)?);
    let mut panel = PanelController::new(options);

    let request = panel.request_generate();
    match session.handle(request) {
        Outcome::Reply(reply) => panel.receive(reply),
        Outcome::Close => return Ok(()),
    }

    let display = panel.display();
    print!("{}", display);
    if !display.ends_with('\n') {
        println!();
    }
    Ok(())
}

fn run_serve(matches: &ArgMatches) -> Result<()> {
    let session = PluginSession::new(load_scene(matches)?);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let replies = session
        .serve(&mut stdin.lock(), &mut stdout.lock())
        .context("Session transport failed")?;
    debug!(replies, "session finished");
    Ok(())
}

fn main() -> Result<()> {
    let matches = cli().get_matches();
    // Global flags are propagated down, so the subcommand sees them wherever they were given.
    let globals = matches.subcommand().map(|(_, sub)| sub).unwrap_or(&matches);
    init_logging(globals.get_flag("verbose"));

    let config = Config::load(globals.get_one::<PathBuf>("config").map(PathBuf::as_path))?;

    match matches.subcommand() {
        Some(("render", sub)) => run_render(sub, &config),
        Some(("serve", sub)) => run_serve(sub),
        _ => unreachable!("subcommand is required"),
    }
}
