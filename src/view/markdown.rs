// Markdown rendering for case study copy

use crate::style::Palette;
use eframe::egui;
use pulldown_cmark::{Event as MarkdownEvent, HeadingLevel, Parser, Tag, TagEnd};

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Span {
    pub text: String,
    pub strong: bool,
    pub emphasis: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    Heading(u8, Vec<Span>),
    Paragraph(Vec<Span>),
    Item(Vec<Span>),
}

/// Flatten Markdown into the handful of block kinds the pages use.
pub fn parse_blocks(source: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut spans: Vec<Span> = Vec::new();
    let mut strong = 0usize;
    let mut emphasis = 0usize;
    let mut heading: Option<u8> = None;
    let mut in_item = false;

    for event in Parser::new(source) {
        match event {
            MarkdownEvent::Start(tag) => match tag {
                Tag::Heading { level, .. } => {
                    heading = Some(match level {
                        HeadingLevel::H1 => 1,
                        HeadingLevel::H2 => 2,
                        HeadingLevel::H3 => 3,
                        HeadingLevel::H4 => 4,
                        HeadingLevel::H5 => 5,
                        HeadingLevel::H6 => 6,
                    });
                }
                Tag::Item => in_item = true,
                Tag::Strong => strong += 1,
                Tag::Emphasis => emphasis += 1,
                _ => {}
            },
            MarkdownEvent::End(tag) => match tag {
                TagEnd::Heading(_) => {
                    let level = heading.take().unwrap_or(1);
                    blocks.push(Block::Heading(level, std::mem::take(&mut spans)));
                }
                TagEnd::Item => {
                    in_item = false;
                    blocks.push(Block::Item(std::mem::take(&mut spans)));
                }
                // Tight list items have no paragraph of their own
                TagEnd::Paragraph if !in_item => {
                    blocks.push(Block::Paragraph(std::mem::take(&mut spans)));
                }
                TagEnd::Strong => strong = strong.saturating_sub(1),
                TagEnd::Emphasis => emphasis = emphasis.saturating_sub(1),
                _ => {}
            },
            MarkdownEvent::Text(text) | MarkdownEvent::Code(text) => spans.push(Span {
                text: text.to_string(),
                strong: strong > 0,
                emphasis: emphasis > 0,
            }),
            MarkdownEvent::SoftBreak | MarkdownEvent::HardBreak => spans.push(Span {
                text: " ".to_string(),
                strong: strong > 0,
                emphasis: emphasis > 0,
            }),
            _ => {}
        }
    }
    blocks
}

fn layout_spans(ui: &egui::Ui, spans: &[Span], size: f32, color: egui::Color32) -> egui::text::LayoutJob {
    let mut job = egui::text::LayoutJob::default();
    for span in spans {
        let mut text = egui::RichText::new(&span.text).size(size).color(color);
        if span.strong {
            text = text.strong();
        }
        if span.emphasis {
            text = text.italics();
        }
        text.append_to(
            &mut job,
            ui.style(),
            egui::FontSelection::Default,
            egui::Align::Center,
        );
    }
    job
}

pub fn render_markdown(ui: &mut egui::Ui, source: &str, palette: &Palette) {
    for block in parse_blocks(source) {
        match block {
            Block::Heading(level, spans) => {
                let size = match level {
                    1 => 28.0,
                    2 => 22.0,
                    3 => 18.0,
                    _ => 16.0,
                };
                let job = layout_spans(ui, &spans, size, palette.text_primary);
                ui.label(job);
                ui.add_space(6.0);
            }
            Block::Paragraph(spans) => {
                let job = layout_spans(ui, &spans, 15.0, palette.text_secondary);
                ui.label(job);
                ui.add_space(8.0);
            }
            Block::Item(spans) => {
                ui.horizontal_wrapped(|ui| {
                    ui.label(egui::RichText::new("•").color(palette.brand));
                    let job = layout_spans(ui, &spans, 15.0, palette.text_secondary);
                    ui.label(job);
                });
                ui.add_space(4.0);
            }
        }
    }
}
