use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "shalom", version)]
struct Cli {
    /// Log verbosity: -v for debug, -vv for trace.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Export the active canvas of a design as a PNG.
    Export(ExportArgs),
    /// List the card and flyer templates.
    Templates,
    /// Print the effective flyer block rectangles of a template.
    Blocks(BlocksArgs),
}

#[derive(Parser, Debug)]
struct ExportArgs {
    /// Input design JSON. Defaults apply when omitted.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Asset root holding `shalom-logo.png`, `flores.jpg` and `fonts/`.
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Directory the PNG is written into.
    #[arg(long)]
    out_dir: PathBuf,

    /// Override the design's active composition (`card` or `flyer`).
    #[arg(long)]
    mode: Option<shalom::Mode>,

    /// Override the active composition's template id.
    #[arg(long)]
    template: Option<String>,

    /// Photo file for the card.
    #[arg(long)]
    photo: Option<PathBuf>,

    /// Supersampling factor.
    #[arg(long, default_value_t = 3.0)]
    scale: f32,

    /// Font settling delay in milliseconds.
    #[arg(long, default_value_t = 200)]
    settle_ms: u64,

    /// Backdrop colour (`#RRGGBB` or `#RRGGBBAA`); transparent when omitted.
    #[arg(long)]
    background: Option<String>,
}

#[derive(Parser, Debug)]
struct BlocksArgs {
    /// Flyer template id.
    #[arg(long)]
    template: String,

    /// Design JSON whose overrides apply.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Export(args) => cmd_export(args),
        Command::Templates => cmd_templates(),
        Command::Blocks(args) => cmd_blocks(args),
    }
}

fn load_design(path: Option<&PathBuf>) -> anyhow::Result<shalom::Design> {
    match path {
        Some(p) => shalom::Design::from_path(p)
            .with_context(|| format!("load design '{}'", p.display())),
        None => Ok(shalom::Design::default()),
    }
}

fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
    let mut editor = load_design(args.in_path.as_ref())?.into_editor();
    if let Some(mode) = args.mode {
        editor.set_mode(mode);
    }
    if let Some(template) = args.template {
        editor.select_template(template);
    }
    if let Some(photo) = &args.photo
        && !editor.upload_photo_file(photo)?
    {
        eprintln!("photo '{}' is not a recognised image, ignored", photo.display());
    }

    let assets = match &args.assets {
        Some(root) => shalom::AssetStore::prepare(root)?,
        None => shalom::AssetStore::empty(),
    };
    let background = args
        .background
        .as_deref()
        .map(shalom::Color::from_hex)
        .transpose()
        .map_err(|e| anyhow::anyhow!("invalid --background: {e}"))?;
    let settings = shalom::ExportSettings {
        scale: args.scale,
        settle: std::time::Duration::from_millis(args.settle_ms),
        background,
    };

    let mut sink = shalom::DirectorySink::new(&args.out_dir);
    let mut notifier = shalom::LogNotifier;
    match editor.export(&assets, &settings, &mut sink, &mut notifier)? {
        shalom::ExportOutcome::Downloaded { file_name } => {
            eprintln!("wrote {}", args.out_dir.join(file_name).display());
            Ok(())
        }
        other => anyhow::bail!("nothing exported: {other:?}"),
    }
}

fn cmd_templates() -> anyhow::Result<()> {
    for t in shalom::CardTemplate::ALL {
        println!("card   {:<8} {} {}", t.id(), t.preview(), t.name());
    }
    for t in shalom::FlyerTemplate::ALL {
        println!("flyer  {:<8} {} {}", t.id(), t.preview(), t.name());
    }
    Ok(())
}

fn cmd_blocks(args: BlocksArgs) -> anyhow::Result<()> {
    let design = load_design(args.in_path.as_ref())?;
    let layout = design.flyer.layout();
    if shalom::FlyerTemplate::from_id(&args.template).is_none() {
        eprintln!(
            "unknown flyer template '{}', showing {} defaults",
            args.template,
            shalom::FlyerTemplate::FIRST.id()
        );
    }
    for block in shalom::BlockId::ALL {
        let r = layout.get_rect(&args.template, block);
        let mark = if layout.is_overridden(&args.template, block) {
            " (moved)"
        } else {
            ""
        };
        println!(
            "{:<9} x={} y={} w={} h={}{mark}",
            block.as_str(),
            r.x,
            r.y,
            r.width,
            r.height
        );
    }
    Ok(())
}
