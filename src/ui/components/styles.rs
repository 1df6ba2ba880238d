pub fn table_container_style() -> &'static str {
    "overflow: auto; max-height: 60vh; border: 1px solid #bbb; border-radius: 6px;"
}

pub fn table_header_cell_style() -> &'static str {
    "position: sticky; top: 0; border: 1px solid #bbb; padding: 6px; background: #f2f2f2; text-align: left; white-space: nowrap;"
}

pub fn table_cell_style() -> &'static str {
    "border: 1px solid #ddd; padding: 6px; white-space: nowrap;"
}

pub fn button_style(enabled: bool) -> &'static str {
    if enabled {
        "border: 1px solid #bbb; background: #fff; padding: 4px 10px; border-radius: 6px; cursor: pointer;"
    } else {
        "border: 1px solid #ddd; background: #f5f5f5; color: #999; padding: 4px 10px; border-radius: 6px; cursor: default;"
    }
}

pub fn toolbar_style() -> &'static str {
    "display: flex; gap: 12px; align-items: center; flex-wrap: wrap; padding: 8px 0;"
}
