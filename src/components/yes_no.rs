//! Yes/No Component
//!
//! Renders a boolean flag the way the roster and dialog show it.

use leptos::*;

/// Text for a boolean flag
pub fn yes_no_label(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// Colored Yes/No badge
#[component]
pub fn YesNo(value: bool) -> impl IntoView {
    let class = if value {
        "text-green-600 font-medium"
    } else {
        "text-gray-400"
    };

    view! {
        <span class=class>{yes_no_label(value)}</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yes_no_label() {
        assert_eq!(yes_no_label(true), "Yes");
        assert_eq!(yes_no_label(false), "No");
    }
}
