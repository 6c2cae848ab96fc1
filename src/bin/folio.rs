use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use folio::{AssetCatalog, LayoutEngine, PreparedImages, Project, RenderOptions, RenderReport};

#[derive(Parser, Debug)]
#[command(name = "folio", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the layout chosen for a number of photos.
    Layout(LayoutArgs),
    /// Write one page's interactive preview as HTML.
    Preview(PageArgs),
    /// Write the whole book as a print PDF.
    Export(ExportArgs),
    /// Rasterize one page to PNG.
    Proof(ProofArgs),
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Number of photos.
    #[arg(long)]
    count: usize,

    /// Remix this many times after the first pick.
    #[arg(long, default_value_t = 0)]
    remix: usize,
}

#[derive(Parser, Debug)]
struct PageArgs {
    /// Input project JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Page index (0-based).
    #[arg(long)]
    page: usize,

    /// Output path.
    #[arg(long)]
    out: PathBuf,

    /// Render options JSON.
    #[arg(long)]
    options: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ExportArgs {
    /// Input project JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PDF path.
    #[arg(long)]
    out: PathBuf,

    /// Named print size, e.g. `square-8x8`.
    #[arg(long)]
    size: Option<String>,

    /// Add a 1/8" bleed around every page.
    #[arg(long)]
    bleed: bool,

    /// Render options JSON.
    #[arg(long)]
    options: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ProofArgs {
    #[command(flatten)]
    page: PageArgs,

    /// Output resolution.
    #[arg(long, default_value_t = folio::render::raster::DEFAULT_PROOF_DPI)]
    dpi: f64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Layout(args) => cmd_layout(args),
        Command::Preview(args) => cmd_preview(args),
        Command::Export(args) => cmd_export(args),
        Command::Proof(args) => cmd_proof(args),
    }
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let engine = LayoutEngine::default();
    let photos: Vec<String> = (1..=args.count).map(|i| format!("photo-{i}")).collect();
    let mut layout = engine
        .next_layout(&photos, None)
        .context("--count must be at least 1")?;
    for _ in 0..args.remix {
        layout = engine
            .remix(&photos, Some(&layout))
            .context("--count must be at least 1")?;
    }
    println!("{}", serde_json::to_string_pretty(&layout)?);
    Ok(())
}

fn cmd_preview(args: PageArgs) -> anyhow::Result<()> {
    let loaded = load(&args.in_path, args.options.as_deref())?;
    let page = loaded.page(args.page)?;
    let images = loaded.prepare(&folio::compile::sources_for_page(page, &loaded.catalog))?;

    let (node, report) = folio::render::dom::render(
        page,
        args.page,
        &loaded.catalog,
        &images,
        &loaded.options,
        &folio::Selection::None,
    )?;
    print_report(&report);

    let html = format!(
        "<!doctype html>\n<html><head><meta charset=\"utf-8\"></head><body>{}</body></html>\n",
        node.to_html()
    );
    write_out(&args.out, html.as_bytes())
}

fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
    let mut loaded = load(&args.in_path, args.options.as_deref())?;
    if args.size.is_some() {
        loaded.options.print_size = args.size;
    }
    loaded.options.bleed |= args.bleed;

    let (bytes, report) =
        folio::export_book(&loaded.project, &loaded.catalog, &loaded.loader()?, &loaded.options)?;
    print_report(&report);
    write_out(&args.out, &bytes)
}

fn cmd_proof(args: ProofArgs) -> anyhow::Result<()> {
    let loaded = load(&args.page.in_path, args.page.options.as_deref())?;
    let page = loaded.page(args.page.page)?;
    let images = loaded.prepare(&folio::compile::sources_for_page(page, &loaded.catalog))?;

    let (png, report) = folio::render_png(
        page,
        args.page.page,
        &loaded.catalog,
        &images,
        &loaded.options,
        args.dpi,
    )?;
    print_report(&report);
    write_out(&args.page.out, &png)
}

struct Loaded {
    project: Project,
    catalog: AssetCatalog,
    options: RenderOptions,
    root: PathBuf,
}

impl Loaded {
    fn page(&self, index: usize) -> anyhow::Result<&folio::Page> {
        self.project.pages.get(index).with_context(|| {
            format!(
                "page {index} out of range (project has {} pages)",
                self.project.pages.len()
            )
        })
    }

    fn loader(&self) -> anyhow::Result<folio::SourceLoader> {
        Ok(self.options.loader()?.with_root(self.root.clone()))
    }

    fn prepare(&self, sources: &[String]) -> anyhow::Result<PreparedImages> {
        Ok(PreparedImages::prepare(
            sources,
            &self.loader()?,
            self.options.threads,
        )?)
    }
}

fn load(project_path: &Path, options_path: Option<&Path>) -> anyhow::Result<Loaded> {
    let project = Project::from_path(project_path)
        .with_context(|| format!("load project '{}'", project_path.display()))?;
    let mut options = match options_path {
        Some(p) => RenderOptions::from_path(p)?,
        None => RenderOptions::default(),
    };
    if options.print_size.is_none() {
        options.print_size = project.print_size.clone();
    }
    let catalog = AssetCatalog::for_project(&project);
    let root = project_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    Ok(Loaded {
        project,
        catalog,
        options,
        root,
    })
}

fn print_report(report: &RenderReport) {
    for d in &report.diagnostics {
        let page = d
            .page_index
            .map_or_else(|| "cover".to_owned(), |i| format!("page {i}"));
        match d.slot_index {
            Some(slot) => eprintln!("{:?} ({page}, slot {slot}): {}", d.kind, d.detail),
            None => eprintln!("{:?} ({page}): {}", d.kind, d.detail),
        }
    }
}

fn write_out(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write '{}'", path.display()))?;
    eprintln!("wrote {}", path.display());
    Ok(())
}
