//
//  floe-cli
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/20.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Table rendering via `comfy_table`.

use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};

use super::TableOutput;

/// Renders a list of entities as a table, one row per entity.
pub fn render_table<T: TableOutput>(items: &[T]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(T::headers());
    for item in items {
        table.add_row(item.row());
    }
    format!("{table}\n")
}

/// Renders a single entity as a two-column key/value table.
pub fn render_item_table<T: TableOutput>(item: &T) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
    for (header, value) in T::headers().into_iter().zip(item.row()) {
        table.add_row(vec![header.to_string(), value]);
    }
    format!("{table}\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(&'static str, i64);

    impl TableOutput for Row {
        fn headers() -> Vec<&'static str> {
            vec!["NAME", "ID"]
        }

        fn row(&self) -> Vec<String> {
            vec![self.0.to_string(), self.1.to_string()]
        }
    }

    #[test]
    fn test_render_table_contains_rows() {
        let out = render_table(&[Row("rnaseq", 1), Row("sarek", 2)]);
        assert!(out.contains("NAME"));
        assert!(out.contains("rnaseq"));
        assert!(out.contains("sarek"));
    }

    #[test]
    fn test_render_item_table_is_key_value() {
        let out = render_item_table(&Row("rnaseq", 1));
        assert!(out.contains("NAME"));
        assert!(out.contains("rnaseq"));
    }
}
