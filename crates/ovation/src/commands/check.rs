use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::deck::{self, LayoutKind};

/// Validate a deck file and print a per-slide report.
pub fn run(file: &Path) -> Result<()> {
    let deck = match deck::load(file) {
        Ok(deck) => deck,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            for cause in err.chain().skip(1) {
                eprintln!("  {} {}", "caused by:".red(), cause);
            }
            std::process::exit(1);
        }
    };

    let title = deck.title.as_deref().unwrap_or("(untitled deck)");
    println!("{} {}", "Deck:".bold(), title);
    println!("{} {}", "Slides:".bold(), deck.slides.len());
    println!();

    let mut interactive = 0;
    for slide in &deck.slides {
        let kind = layout_name(slide.layout);
        let marker = if slide.layout == LayoutKind::Unknown {
            // Valid but falls back to the plain title template
            "~".yellow()
        } else {
            "\u{2713}".green()
        };
        if is_interactive(slide.layout) {
            interactive += 1;
        }
        println!(
            "  {} {:>3}  {:<18} {}",
            marker,
            slide.id + 1,
            kind,
            slide.title
        );
    }

    println!();
    println!(
        "{} {} slides, {} interactive",
        "ok:".green().bold(),
        deck.slides.len(),
        interactive
    );
    Ok(())
}

fn layout_name(kind: LayoutKind) -> &'static str {
    match kind {
        LayoutKind::TitleOnly => "title-only",
        LayoutKind::BulletPoints => "bullet-points",
        LayoutKind::GridCards => "grid-cards",
        LayoutKind::SplitImage => "split-image",
        LayoutKind::CenteredQuote => "centered-quote",
        LayoutKind::DiagramHub => "diagram-hub",
        LayoutKind::ProcessSteps => "process-steps",
        LayoutKind::InteractiveQuiz => "interactive-quiz",
        LayoutKind::StatsDashboard => "stats-dashboard",
        LayoutKind::FlipCards => "flip-cards",
        LayoutKind::IcebergReveal => "iceberg-reveal",
        LayoutKind::WordCloud => "word-cloud",
        LayoutKind::BalanceScale => "balance-scale",
        LayoutKind::ToolboxOrbit => "toolbox-orbit",
        LayoutKind::CaseStudy => "case-study",
        LayoutKind::TimelineScrubber => "timeline-scrubber",
        LayoutKind::ChatBubbles => "chat-bubbles",
        LayoutKind::Unknown => "unknown (fallback)",
    }
}

fn is_interactive(kind: LayoutKind) -> bool {
    matches!(
        kind,
        LayoutKind::DiagramHub
            | LayoutKind::InteractiveQuiz
            | LayoutKind::FlipCards
            | LayoutKind::IcebergReveal
            | LayoutKind::BalanceScale
            | LayoutKind::ToolboxOrbit
            | LayoutKind::CaseStudy
            | LayoutKind::TimelineScrubber
    )
}
