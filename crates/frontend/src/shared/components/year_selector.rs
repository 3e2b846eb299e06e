use chrono::{Datelike, Utc};
use leptos::prelude::*;

/// Anos oferecidos: do anterior até dois à frente do ano corrente
pub fn year_range(current: i32) -> Vec<i32> {
    (current - 1..=current + 2).collect()
}

pub fn current_year() -> i32 {
    Utc::now().date_naive().year()
}

#[component]
pub fn YearSelector(
    #[prop(into)] value: Signal<i32>,
    on_change: Callback<i32>,
) -> impl IntoView {
    let years = Signal::derive(move || {
        let mut years = year_range(current_year());
        let selected = value.get();
        if !years.contains(&selected) {
            years.push(selected);
            years.sort_unstable();
        }
        years
    });

    view! {
        <label class="year-selector">
            <span class="filter-select__label">"Ano"</span>
            <select
                class="filter-select__input"
                on:change=move |ev| {
                    if let Ok(year) = event_target_value(&ev).parse() {
                        on_change.run(year);
                    }
                }
                prop:value=move || value.get().to_string()
            >
                {move || {
                    let selected = value.get();
                    years
                        .get()
                        .into_iter()
                        .map(|y| view! { <option value=y.to_string() selected=y == selected>{y}</option> })
                        .collect_view()
                }}
            </select>
        </label>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_around_current_year() {
        assert_eq!(year_range(2025), vec![2024, 2025, 2026, 2027]);
    }
}
