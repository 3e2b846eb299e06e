use leptos::prelude::*;

/// Contornos no estilo lucide, todos como `<path d=...>`
fn icon_paths(name: &str) -> &'static [&'static str] {
    match name {
        "users" => &[
            "M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2",
            "M12 3a4 4 0 1 0 0 8a4 4 0 1 0 0-8z",
        ],
        "calendar" => &[
            "M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
            "M16 2v4",
            "M8 2v4",
            "M3 10h18",
        ],
        "clipboard" => &[
            "M16 4h2a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2h2",
            "M9 2h6v4H9z",
        ],
        "bar-chart" => &["M12 20V10", "M18 20V4", "M6 20v-4"],
        "archive" => &[
            "M3 3h18v5H3z",
            "M5 8v11a2 2 0 0 0 2 2h10a2 2 0 0 0 2-2V8",
            "M10 12h4",
        ],
        "restore" => &["M3 12a9 9 0 1 0 3-6.7L3 8", "M3 3v5h5"],
        "plus" => &["M12 5v14", "M5 12h14"],
        "x" => &["M18 6 6 18", "M6 6l12 12"],
        "edit" => &[
            "M11 4H4a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2v-7",
            "M18.5 2.5a2.1 2.1 0 0 1 3 3L12 15l-4 1 1-4 9.5-9.5z",
        ],
        "trash" => &[
            "M3 6h18",
            "M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6",
            "M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2",
        ],
        "refresh" => &[
            "M21 12a9 9 0 0 1-15.5 6.2L3 16",
            "M3 12a9 9 0 0 1 15.5-6.2L21 8",
            "M21 3v5h-5",
            "M3 21v-5h5",
        ],
        "filter" => &["M22 3H2l8 9.5V19l4 2v-8.5z"],
        "download" => &[
            "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4",
            "M7 10l5 5 5-5",
            "M12 15V3",
        ],
        "play" => &["M6 3l14 9-14 9z"],
        "shuffle" => &[
            "M16 3h5v5",
            "M4 20 21 3",
            "M21 16v5h-5",
            "M15 15l6 6",
            "M4 4l5 5",
        ],
        "log-out" => &["M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4", "M16 17l5-5-5-5", "M21 12H9"],
        "chevron-left" => &["M15 18l-6-6 6-6"],
        "chevron-right" => &["M9 18l6-6-6-6"],
        "chevrons-left" => &["M11 17l-5-5 5-5", "M18 17l-5-5 5-5"],
        "chevrons-right" => &["M13 17l5-5-5-5", "M6 17l5-5-5-5"],
        _ => &["M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20z", "M12 8v4l3 3"],
    }
}

pub fn icon(name: &str) -> AnyView {
    let paths = icon_paths(name);
    view! {
        <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            {paths.iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
    .into_any()
}
