//! PageFrame: raiz padrão de toda página do painel.
//!
//! ```rust,ignore
//! view! {
//!     <PageFrame page_id="a002_ferias--list" category=PAGE_CAT_LIST>
//!         <div class="page__header">...</div>
//!         <div class="page__content">...</div>
//!     </PageFrame>
//! }
//! ```

use super::page_standard::*;
use leptos::prelude::*;

/// Classe base por categoria
pub fn page_class(category: &str, extra: &str) -> String {
    let base = match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        PAGE_CAT_SYSTEM => "page page--system",
        _ => "page",
    };
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{base} {extra}")
    }
}

#[component]
pub fn PageFrame(
    /// `{entidade}--{categoria}`, ex.: `"a003_afastamento--list"`
    page_id: &'static str,
    /// Uma das constantes PAGE_CAT_*
    category: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    if !is_valid_page_id(page_id) {
        log::warn!("PageFrame: id fora do padrão: {}", page_id);
    }

    view! {
        <div id=page_id class=page_class(category, class) data-page-category=category>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_by_category() {
        assert_eq!(page_class(PAGE_CAT_LIST, ""), "page");
        assert_eq!(page_class(PAGE_CAT_DASHBOARD, "visao"), "page page--dashboard visao");
    }
}
