use std::path::Path;

use console::Style;
use pixelpaint_core::pipeline::config::ArtConfig;
use pixelpaint_core::pipeline::recommended_color_range;
use pixelpaint_core::session::ProgressInfo;
use pixelpaint_core::PixelArt;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    done: Style,
    warn: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            done: Style::new().green(),
            warn: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

/// Outcome counts of one `paint` run.
#[derive(Default)]
pub struct TapTally {
    pub colored: usize,
    pub already_colored: usize,
    pub wrong: usize,
    pub skipped: usize,
    pub color_completed: bool,
    pub artwork_completed: bool,
}

fn print_title(s: &Styles, title: &str) {
    println!();
    println!("  {}", s.title.apply_to(title));
    println!(
        "  {}",
        s.title.apply_to("\u{2550}".repeat(title.chars().count()))
    );
    println!();
}

fn percent(fraction: f32) -> String {
    format!("{:.1}%", fraction * 100.0)
}

pub fn print_create_summary(config: &ArtConfig, art: &PixelArt) {
    let s = Styles::new();
    print_title(&s, "PixelPaint Project");

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(config.input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Project"),
        s.path.apply_to(config.output.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Grid"),
        s.value.apply_to(format!("{}x{}", art.grid.cols(), art.grid.rows()))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Filter"),
        s.value.apply_to(config.grid.filter)
    );

    let range = recommended_color_range(art.grid.cols() as u32, art.grid.rows() as u32);
    let requested = match config.palette.color_count {
        Some(n) => n.to_string(),
        None => "auto".to_string(),
    };
    println!(
        "  {:<14}{} {}",
        s.label.apply_to("Colors"),
        s.value.apply_to(art.palette.len()),
        s.label.apply_to(format!(
            "(requested {requested}, recommended {}-{})",
            range.start(),
            range.end()
        ))
    );
    println!();
}

pub fn print_project_summary(path: &Path, art: &PixelArt, info: &ProgressInfo) {
    let s = Styles::new();
    print_title(&s, "PixelPaint Project");

    let progress = info.progress();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Project"),
        s.path.apply_to(path.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Grid"),
        s.value.apply_to(format!("{}x{}", art.grid.cols(), art.grid.rows()))
    );
    println!(
        "  {:<14}{} {}",
        s.label.apply_to("Progress"),
        s.value.apply_to(percent(progress.global_progress)),
        s.label.apply_to(format!("({}/{} cells)", info.total_colored, info.total_pixels))
    );
    println!();

    println!("  {}", s.header.apply_to("Palette"));
    for (i, color) in art.palette.iter().enumerate() {
        let status = if info.is_color_done(i) {
            s.done.apply_to("done".to_string())
        } else {
            s.warn.apply_to(format!("{} left", info.remaining(i)))
        };
        println!(
            "    {:>3}  {}  {:>7}  {}",
            s.label.apply_to(i),
            s.value.apply_to(color),
            percent(progress.per_color_progress[i]),
            status
        );
    }
    println!();
}

pub fn print_paint_summary(color: usize, tally: &TapTally, info: &ProgressInfo) {
    let s = Styles::new();
    print_title(&s, "Painting");

    println!(
        "  {:<14}{}",
        s.label.apply_to("Color"),
        s.value.apply_to(color)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Colored"),
        s.done.apply_to(tally.colored)
    );
    if tally.already_colored > 0 {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Already done"),
            s.value.apply_to(tally.already_colored)
        );
    }
    if tally.wrong > 0 {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Wrong color"),
            s.warn.apply_to(tally.wrong)
        );
    }
    if tally.skipped > 0 {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Skipped"),
            s.warn.apply_to(format!("{} (color finished)", tally.skipped))
        );
    }

    let progress = info.progress();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Color left"),
        s.value.apply_to(info.remaining(color))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Progress"),
        s.value.apply_to(percent(progress.global_progress))
    );
    println!();

    if tally.artwork_completed {
        println!("  {}", s.done.apply_to("Artwork complete!"));
        println!();
    } else if tally.color_completed {
        println!("  {}", s.done.apply_to(format!("Color {color} complete")));
        println!();
    }
}
