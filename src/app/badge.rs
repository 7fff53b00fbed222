use leptos::{html, prelude::*};
use leptos_use::use_element_hover;

#[component]
pub fn Badge(#[prop(into)] skill: String) -> impl IntoView {
    let badge_ref = NodeRef::<html::Span>::new();
    let is_hovered = use_element_hover(badge_ref);

    view! {
        <span
            node_ref=badge_ref
            class=move || {
                let scale = if is_hovered.get() { "scale-110" } else { "scale-100" };
                format!(
                    "inline-block px-4 py-1.5 m-2 font-mono text-sm bg-neutral-700 text-neutral-100 rounded-full shadow-md transition-transform duration-200 {scale}",
                )
            }
        >
            {skill}
        </span>
    }
}

#[component]
pub fn BadgeList(skills: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="flex flex-wrap -m-2">
            {skills.iter().map(|skill| view! { <Badge skill=*skill /> }).collect_view()}
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn render<V: IntoView + 'static>(f: impl FnOnce() -> V) -> String {
        let owner = Owner::new();
        owner.with(|| f().into_view().to_html())
    }

    #[test]
    fn test_badge_renders_label_verbatim() {
        let html = render(|| view! { <Badge skill="Rust" /> });
        assert!(html.contains("Rust"));

        let html = render(|| view! { <Badge skill="  C++  " /> });
        assert!(html.contains("  C++  "));
    }

    #[test]
    fn test_badges_independent() {
        let html = render(|| {
            view! {
                <Badge skill="Rust" />
                <Badge skill="Go" />
            }
        });
        assert_eq!(html.matches("Rust").count(), 1);
        assert_eq!(html.matches("Go").count(), 1);
    }

    #[test]
    fn test_badge_list_keeps_order() {
        const SKILLS: &[&str] = &["Axum", "Leptos", "Tokio"];
        let html = render(|| view! { <BadgeList skills=SKILLS /> });
        let axum = html.find("Axum").unwrap();
        let leptos = html.find("Leptos").unwrap();
        let tokio = html.find("Tokio").unwrap();
        assert!(axum < leptos && leptos < tokio);
    }

    #[test]
    fn test_empty_badge_accepted() {
        let html = render(|| view! { <Badge skill="" /> });
        assert!(html.contains("<span"));
    }
}
