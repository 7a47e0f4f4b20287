//! Sheetdown Render
//!
//! Maps the transducer's [`RenderEvent`] stream onto a concrete tag
//! vocabulary and writes the resulting markup lines to an output sink.
//!
//! The state machine lives entirely in the parser; this crate is vocabulary
//! only. The two supported modes — [`html`] and [`markdown`] — differ in
//! their literals, never in their sequencing.
//!
//! # Example
//!
//! ```
//! use sheetdown_core::OutputFormat;
//! use sheetdown_render::Renderer;
//! use sheetdown_parser::RenderEvent;
//!
//! let mut output = Vec::new();
//! let mut renderer = Renderer::new(&mut output, OutputFormat::Html);
//! renderer
//!     .render_event(&RenderEvent::Heading {
//!         level: 1,
//!         text: "Hello".to_string(),
//!     })
//!     .unwrap();
//! assert_eq!(String::from_utf8(output).unwrap(), "<h1>Hello</h1>\n");
//! ```

pub mod html;
pub mod markdown;

use sheetdown_core::OutputFormat;
use sheetdown_parser::RenderEvent;
use std::io::Write;

/// Writes markup lines for a stream of render events.
pub struct Renderer<W: Write> {
    writer: W,
    format: OutputFormat,
    /// Whether any line has been written yet; suppresses the leading
    /// separator blank line at the start of the document.
    wrote_any: bool,
}

impl<W: Write> Renderer<W> {
    /// Create a renderer for the given output format.
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self {
            writer,
            format,
            wrote_any: false,
        }
    }

    /// The output format this renderer writes.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Consume the renderer and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Render a single event.
    pub fn render_event(&mut self, event: &RenderEvent) -> std::io::Result<()> {
        match self.format {
            OutputFormat::Html => self.render_html(event),
            OutputFormat::Markdown => self.render_markdown(event),
        }
    }

    /// Render a sequence of events.
    pub fn render(&mut self, events: &[RenderEvent]) -> std::io::Result<()> {
        for event in events {
            self.render_event(event)?;
        }
        Ok(())
    }

    fn render_html(&mut self, event: &RenderEvent) -> std::io::Result<()> {
        match event {
            RenderEvent::SectionBreak => {
                self.separate()?;
                self.line(html::SECTION_BREAK)?;
            }
            RenderEvent::SectionStart => self.line(html::SECTION_OPEN)?,
            RenderEvent::SectionEnd => self.line(html::SECTION_CLOSE)?,
            RenderEvent::Heading { level, text } => {
                self.separate()?;
                self.line(&html::render_heading(*level, text))?;
            }
            RenderEvent::Paragraph(spans) => {
                self.separate()?;
                self.line(&html::render_paragraph(spans))?;
            }
            RenderEvent::ListStart => self.line(html::LIST_OPEN)?,
            RenderEvent::ListItem(spans) => self.line(&html::render_list_item(spans))?,
            RenderEvent::ListEnd => self.line(html::LIST_CLOSE)?,
            RenderEvent::TableStart => self.line(html::TABLE_OPEN)?,
            RenderEvent::TableHeader(cells) => self.lines(&html::render_table_row(true, cells))?,
            RenderEvent::TableRow(cells) => self.lines(&html::render_table_row(false, cells))?,
            RenderEvent::TableEnd => self.line(html::TABLE_CLOSE)?,
        }
        self.writer.flush()
    }

    fn render_markdown(&mut self, event: &RenderEvent) -> std::io::Result<()> {
        match event {
            RenderEvent::SectionBreak => {
                self.separate()?;
                self.line(markdown::SECTION_BREAK)?;
            }
            // Markdown has no section wrapper.
            RenderEvent::SectionStart | RenderEvent::SectionEnd => {}
            RenderEvent::Heading { level, text } => {
                self.separate()?;
                self.line(&markdown::render_heading(*level, text))?;
            }
            RenderEvent::Paragraph(spans) => {
                self.separate()?;
                self.line(&markdown::render_paragraph(spans))?;
            }
            RenderEvent::ListStart => self.separate()?,
            RenderEvent::ListItem(spans) => self.line(&markdown::render_list_item(spans))?,
            RenderEvent::ListEnd => {}
            RenderEvent::TableStart => self.separate()?,
            RenderEvent::TableHeader(cells) => {
                self.lines(&markdown::render_table_row(true, cells))?
            }
            RenderEvent::TableRow(cells) => self.lines(&markdown::render_table_row(false, cells))?,
            RenderEvent::TableEnd => {}
        }
        self.writer.flush()
    }

    /// Write a blank separator line, except at the very start of output.
    fn separate(&mut self) -> std::io::Result<()> {
        if self.wrote_any {
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn line(&mut self, s: &str) -> std::io::Result<()> {
        writeln!(self.writer, "{}", s)?;
        self.wrote_any = true;
        Ok(())
    }

    fn lines(&mut self, lines: &[String]) -> std::io::Result<()> {
        for l in lines {
            self.line(l)?;
        }
        Ok(())
    }
}
