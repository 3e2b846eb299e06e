use crate::shared::icons::icon;
use leptos::prelude::*;

/// Contagem com separador de milhar pt-BR
pub fn format_count(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatTone {
    #[default]
    Neutral,
    Info,
    Warning,
    Success,
}

impl StatTone {
    fn class(self) -> &'static str {
        match self {
            StatTone::Neutral => "stat-card",
            StatTone::Info => "stat-card stat-card--info",
            StatTone::Warning => "stat-card stat-card--warning",
            StatTone::Success => "stat-card stat-card--success",
        }
    }
}

#[component]
pub fn StatCard(
    label: &'static str,
    icon_name: &'static str,
    #[prop(into)] value: Signal<usize>,
    #[prop(optional)] tone: StatTone,
    #[prop(into, optional)] subtitle: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class=tone.class()>
            <div class="stat-card__header">
                {icon(icon_name)}
                <span class="stat-card__label">{label}</span>
            </div>
            <div class="stat-card__value">{move || format_count(value.get())}</div>
            {move || subtitle.get().map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separator() {
        assert_eq!(format_count(7), "7");
        assert_eq!(format_count(1234), "1.234");
        assert_eq!(format_count(1_000_000), "1.000.000");
    }
}
