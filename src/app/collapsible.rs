use leptos::prelude::*;

use crate::sections::SectionState;

/// Flips one section between expanded and collapsed.
pub fn toggle_section(state: RwSignal<SectionState>, title: &str) {
    state.update(SectionState::toggle);
    log::debug!(
        "section {title:?} {}",
        state.get_untracked().phase().as_str()
    );
}

/// Titled card whose body can be collapsed by activating the title bar.
///
/// The body is only mounted while the section is expanded. Pass `state` to
/// hold the section's signal from outside; otherwise one is created from `open`.
#[component]
pub fn Section(
    #[prop(into)] title: String,
    #[prop(optional, into)] id: Option<String>,
    #[prop(default = true)] open: bool,
    #[prop(optional)] state: Option<RwSignal<SectionState>>,
    children: ChildrenFn,
) -> impl IntoView {
    let state = state.unwrap_or_else(|| RwSignal::new(SectionState::new(open)));
    let label = title.clone();
    let on_toggle = move |_| toggle_section(state, &label);

    view! {
        <div
            id=id
            class="mb-8 bg-neutral-100 rounded-xl overflow-hidden shadow-lg fade-in-up"
            data-state=move || state.get().phase().as_str()
        >
            <button
                type="button"
                class="w-full text-left flex items-center justify-between py-4 px-6"
                aria-expanded=move || {
                    if state.get().is_open() { "true" } else { "false" }
                }
                on:click=on_toggle
            >
                <span class="text-xl font-mono text-neutral-600 font-semibold">{title}</span>
                <span
                    class="text-neutral-600 transition-transform duration-300"
                    style=move || format!("transform: rotate({}deg)", state.get().indicator_rotation())
                >
                    <svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="24"
                        height="24"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    >
                        <path d="m9 18 6-6-6-6" />
                    </svg>
                </span>
            </button>
            <Show when=move || state.get().is_open()>
                <div class="p-6 bg-white backdrop-blur-sm fade-in-up">{children()}</div>
            </Show>
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
    fn test_expanded_by_default() {
        let html = render(|| {
            view! {
                <Section title="About Me">
                    <p>"visible body"</p>
                </Section>
            }
        });
        assert!(html.contains("About Me"));
        assert!(html.contains("visible body"));
        assert!(html.contains(r#"data-state="expanded""#));
        assert!(html.contains(r#"aria-expanded="true""#));
        assert!(html.contains("rotate(90deg)"));
    }

    #[test]
    fn test_collapsed_omits_body() {
        let html = render(|| {
            view! {
                <Section title="Projects" open=false>
                    <p>"hidden body"</p>
                </Section>
            }
        });
        assert!(html.contains("Projects"));
        assert!(!html.contains("hidden body"));
        assert!(html.contains(r#"data-state="collapsed""#));
        assert!(html.contains(r#"aria-expanded="false""#));
        assert!(html.contains("rotate(0deg)"));
    }

    #[test]
    fn test_toggle_unmounts_and_restores_body() {
        let owner = Owner::new();
        owner.with(|| {
            let state = RwSignal::new(SectionState::default());
            let html = move || {
                view! {
                    <Section title="Projects" state>
                        <p>"project list"</p>
                    </Section>
                }
                .into_view()
                .to_html()
            };

            let expanded = html();
            assert!(expanded.contains("project list"));

            toggle_section(state, "Projects");
            assert!(!state.get_untracked().is_open());
            let collapsed = html();
            assert!(!collapsed.contains("project list"));
            assert!(collapsed.contains("Projects"));
            assert!(collapsed.contains(r#"data-state="collapsed""#));
            assert!(collapsed.contains(r#"aria-expanded="false""#));

            toggle_section(state, "Projects");
            assert_eq!(html(), expanded);
        });
    }

    #[test]
    fn test_empty_title_and_body_accepted() {
        let html = render(|| view! { <Section title="">""</Section> });
        assert!(html.contains("<button"));
    }
}
