//! Trellis demo - lays out a sample settings page and logs the result.
//!
//! Usage: `trellis-demo [WIDTHxHEIGHT]`. Set `RUST_LOG=debug` (or `trace`)
//! to see the frame driver and the grid solver at work.

use anyhow::{Context, Result, bail};
use tracing_subscriber::EnvFilter;
use trellis::{
    Block, Grid, GridCell, HorizontalAlignment, LayoutRoot, Padding, Point, Proportion, Rect,
    SingleItemContainer, StackPanel, VerticalAlignment, Widget,
};

const DEFAULT_VIEWPORT: (i32, i32) = (800, 600);

fn main() -> Result<()> {
    // Set up logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let (width, height) = match std::env::args().nth(1) {
        Some(arg) => parse_viewport(&arg).with_context(|| format!("Invalid viewport: {arg:?}"))?,
        None => DEFAULT_VIEWPORT,
    };

    tracing::info!(width, height, "Starting trellis demo");

    let mut root = LayoutRoot::new(settings_page());

    let viewport = Rect::new(0, 0, width, height);
    root.update(viewport);
    report(root.root());

    let click = Point::new(width / 2, height / 2);
    tracing::info!(x = click.x, y = click.y, cell = ?root.root().cell_at(click), "Hit test");

    // Nothing changed: the driver skips the pass
    root.update(viewport);

    // Narrow the sidebar and resize the window
    if let Some(sidebar) = root.root_mut().column_proportions_mut().first_mut() {
        *sidebar = Proportion::pixels(120.0);
    }
    root.update(Rect::new(0, 0, width / 2, height / 2));
    report(root.root());

    tracing::info!(frames = root.frames(), "Done");
    Ok(())
}

/// Parse `WIDTHxHEIGHT` into a viewport size.
fn parse_viewport(arg: &str) -> Result<(i32, i32)> {
    let (width, height) = arg
        .split_once(['x', 'X'])
        .context("Expected WIDTHxHEIGHT")?;
    let width: i32 = width.trim().parse().context("Width is not a number")?;
    let height: i32 = height.trim().parse().context("Height is not a number")?;
    if width <= 0 || height <= 0 {
        bail!("Viewport must be positive, got {width}x{height}");
    }
    Ok((width, height))
}

/// Sidebar, header, a label/field form and a button row.
fn settings_page() -> Grid {
    let sidebar = StackPanel::vertical()
        .spacing(4)
        .padding(8)
        .push(Block::new(140, 28))
        .push(Block::new(140, 28))
        .push(Block::new(140, 28));

    let header = SingleItemContainer::new()
        .padding(12)
        .with_child(Block::new(240, 32).align(HorizontalAlignment::Left, VerticalAlignment::Center));

    let form = Grid::new()
        .columns([Proportion::AUTO, Proportion::FILL])
        .rows([Proportion::AUTO, Proportion::AUTO, Proportion::AUTO])
        .column_spacing(12)
        .row_spacing(8)
        .padding(12)
        .push(Block::new(80, 20), GridCell::at(0, 0))
        .push(Block::new(200, 24), GridCell::at(1, 0))
        .push(Block::new(110, 20), GridCell::at(0, 1))
        .push(Block::new(200, 24), GridCell::at(1, 1))
        .push(Block::new(300, 60), GridCell::at(0, 2).column_span(2));

    let buttons = StackPanel::horizontal()
        .spacing(8)
        .padding_custom(Padding::symmetric(12, 8))
        .proportions([Proportion::FILL, Proportion::AUTO, Proportion::AUTO])
        .push(Block::new(0, 0))
        .push(Block::new(90, 30))
        .push(Block::new(90, 30));

    Grid::new()
        .columns([Proportion::AUTO, Proportion::FILL])
        .rows([Proportion::AUTO, Proportion::FILL, Proportion::AUTO])
        .push(sidebar, GridCell::at(0, 0).row_span(3))
        .push(header, GridCell::at(1, 0))
        .push(form, GridCell::at(1, 1))
        .push(buttons, GridCell::at(1, 2))
}

fn report(page: &Grid) {
    let layout = page.layout();
    tracing::info!(
        columns = ?layout.column_widths(),
        rows = ?layout.row_heights(),
        lines_x = ?layout.grid_lines_x(),
        lines_y = ?layout.grid_lines_y(),
        "Page tracks"
    );

    for (index, slot) in page.children().iter().enumerate() {
        let bounds = slot.widget.bounds();
        tracing::info!(
            index,
            column = slot.cell.column,
            row = slot.cell.row,
            x = bounds.x,
            y = bounds.y,
            width = bounds.width,
            height = bounds.height,
            "Child arranged"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_viewport() {
        assert_eq!(parse_viewport("1024x768").unwrap(), (1024, 768));
        assert_eq!(parse_viewport("640X480").unwrap(), (640, 480));
        assert!(parse_viewport("1024").is_err());
        assert!(parse_viewport("ax768").is_err());
        assert!(parse_viewport("0x10").is_err());
    }

    #[test]
    fn test_settings_page_fits_viewport() {
        let mut page = settings_page();
        page.arrange(Rect::new(0, 0, 800, 600));

        // Sidebar: 140 content + 16 padding
        assert_eq!(page.layout().column_widths(), &[156, 644]);
        for slot in page.children() {
            let bounds = slot.widget.bounds();
            assert!(bounds.right() <= 800 && bounds.bottom() <= 600);
        }
        assert_eq!(page.cell_at(Point::new(400, 300)), Some((1, 1)));
        assert_eq!(page.cell_at(Point::new(20, 300)), Some((0, 1)));
    }
}
