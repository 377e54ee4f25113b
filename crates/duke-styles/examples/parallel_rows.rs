//! Style a table with parallel rows and print the style section
//!
//! Run with: cargo run -p duke-styles --example parallel_rows

use duke_styles::prelude::*;
use rayon::prelude::*;

const ROWS: u32 = 1_000;

#[derive(Clone, Copy)]
enum Column {
    Name,
    Amount,
    Date,
    Note,
}

const COLUMNS: [Column; 4] = [Column::Name, Column::Amount, Column::Date, Column::Note];

fn column_style(column: Column) -> StyleDeclaration {
    let decl = StyleDeclaration::new(Scope::Field);
    match column {
        Column::Name => decl.locked(false),
        Column::Amount => decl
            .data_format(NumberFormat::ID_NUMBER_SEP_DEC2)
            .horizontal_alignment(HorizontalAlignment::Right),
        Column::Date => decl.data_format(NumberFormat::ID_DATE_SHORT),
        Column::Note => decl.wrapped(true).rotation(135),
    }
}

fn main() -> Result<()> {
    let session = StyleSession::new(FormatDescriptor::xls());

    let global = StyleDeclaration::new(Scope::Global)
        .locked(true)
        .hidden(false)
        .borders(BorderLineStyle::Thin);
    let banded = StyleDeclaration::new(Scope::Override)
        .fill_pattern(PatternType::Solid)
        .fill_foreground_color(Color::rgb(230, 230, 250));

    let rows: Vec<Vec<(CellCoordinate, StyleHandle)>> = (0..ROWS)
        .into_par_iter()
        .map(|row| -> Result<Vec<(CellCoordinate, StyleHandle)>> {
            let mut sink = Vec::with_capacity(COLUMNS.len());
            for (col, column) in COLUMNS.iter().enumerate() {
                let mut decls = vec![global.clone(), column_style(*column)];
                if row % 2 == 1 {
                    decls.push(banded.clone());
                }
                let cell = CellCoordinate::new(row, col as u16);
                session.apply(cell, &decls, &mut sink)?;
            }
            Ok(sink)
        })
        .collect::<Result<_>>()?;

    let styled: usize = rows.iter().map(Vec::len).sum();
    let table = session.seal();
    println!("{styled} cells share {} styles", table.len());
    println!("{:?}", session.stats());

    for record in table.records(session.format()) {
        println!(
            "{}: numFmt={} rotation={} locked={} fill={} borders={:?}",
            record.handle,
            record.num_fmt_id,
            record.rotation,
            record.locked,
            record.fill_foreground,
            record.border_styles
        );
    }
    Ok(())
}
