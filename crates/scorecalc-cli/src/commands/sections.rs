//! The `scorecalc sections` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use scorecalc_core::model::{ActVariant, SatVariant, SectionSpec, Test};

pub fn execute(test: Option<String>) -> Result<()> {
    let test: Option<Test> = test.map(|t| t.parse()).transpose()?;

    if test.is_none() || test == Some(Test::Act) {
        for variant in [ActVariant::Enhanced, ActVariant::Legacy] {
            print_sections(variant.title(), &variant.sections());
        }
    }
    if test.is_none() || test == Some(Test::Sat) {
        for variant in [SatVariant::Digital, SatVariant::Legacy] {
            print_sections(variant.title(), &variant.sections());
        }
    }

    Ok(())
}

fn print_sections(title: &str, sections: &[SectionSpec]) {
    let mut table = Table::new();
    table.set_header(vec!["Key", "Section", "Questions"]);
    for s in sections {
        table.add_row(vec![Cell::new(s.key), Cell::new(s.label), Cell::new(s.max)]);
    }
    println!("{title}\n{table}\n");
}
