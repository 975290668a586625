use dioxus::prelude::*;

/// Horizontal alignment of a column.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ColumnAlign {
    #[default]
    Start,
    End,
}

impl ColumnAlign {
    fn class(&self) -> &'static str {
        match self {
            ColumnAlign::Start => "align-start",
            ColumnAlign::End => "align-end",
        }
    }
}

/// Scrollable table wrapper with separated, rounded rows.
#[component]
pub fn DataTable(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table {
                {children}
            }
        }
    }
}

/// Table header section; wraps `th` elements in a `thead > tr`.
#[component]
pub fn DataTableHeader(children: Element) -> Element {
    rsx! {
        thead {
            tr { {children} }
        }
    }
}

#[component]
pub fn DataTableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

#[component]
pub fn DataTableColumn(#[props(default)] align: ColumnAlign, children: Element) -> Element {
    rsx! {
        th { class: align.class(), {children} }
    }
}

/// Table row, clickable when `onclick` is set.
#[component]
pub fn DataTableRow(
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let has_click = onclick.is_some();
    rsx! {
        tr {
            class: if has_click { "data-table-row clickable" } else { "data-table-row" },
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn DataTableCell(
    #[props(default)] align: ColumnAlign,
    #[props(default)] mono: bool,
    children: Element,
) -> Element {
    let class = if mono {
        format!("{} mono", align.class())
    } else {
        align.class().to_string()
    };
    rsx! {
        td { class: class, {children} }
    }
}

/// Full-width row shown when a table has no data.
#[component]
pub fn DataTableEmpty(colspan: usize, children: Element) -> Element {
    rsx! {
        tr { class: "data-table-empty",
            td { colspan: "{colspan}", {children} }
        }
    }
}
