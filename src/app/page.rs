use chrono::{DateTime, Utc};
use leptos::prelude::*;

use super::{badge::BadgeList, collapsible::Section};
use crate::{
    config::SiteConfig,
    profile::{
        copyright_line, current_copyright_line, EXPERIENCE, PROFILE, PROJECTS, SKILLS,
        SOCIAL_LINKS,
    },
    sections::{SectionKind, SectionState},
};

/// One signal per page section, in page order.
///
/// Each section reads and writes only its own signal.
#[derive(Debug, Clone, Copy)]
pub struct SectionDeck {
    signals: [RwSignal<SectionState>; 4],
}

impl SectionDeck {
    pub fn new() -> Self {
        Self {
            signals: SectionKind::ALL.map(|_| RwSignal::new(SectionState::default())),
        }
    }

    pub fn signal(&self, kind: SectionKind) -> RwSignal<SectionState> {
        let idx = match kind {
            SectionKind::About => 0,
            SectionKind::Experience => 1,
            SectionKind::Projects => 2,
            SectionKind::Skills => 3,
        };
        self.signals[idx]
    }

    pub fn state(&self, kind: SectionKind) -> SectionState {
        self.signal(kind).get_untracked()
    }
}

impl Default for SectionDeck {
    fn default() -> Self {
        Self::new()
    }
}

/// The whole portfolio: header, the four collapsible sections, links and footer.
///
/// `now` pins the copyright year; without it the clock is read at render time.
/// `sections` lets the caller hold the section signals; by default the page
/// creates its own.
#[component]
pub fn PortfolioPage(
    #[prop(optional)] config: SiteConfig,
    #[prop(optional)] now: Option<DateTime<Utc>>,
    #[prop(optional)] sections: Option<SectionDeck>,
) -> impl IntoView {
    let sections = sections.unwrap_or_default();

    view! {
        <div class="h-screen overflow-y-auto no-scrollbar bg-gradient-to-r from-green-50 via-white to-gray-50 border-t-4 font-mono">
            <div class="container mx-auto px-4 py-12">
                <div class="max-w-4xl mx-auto" id="content">
                    <ProfileHeader />
                    <Section
                        title=SectionKind::About.title()
                        id=SectionKind::About.anchor()
                        state=sections.signal(SectionKind::About)
                    >
                        <p class="leading-relaxed">{PROFILE.bio}</p>
                    </Section>
                    <Section
                        title=SectionKind::Experience.title()
                        id=SectionKind::Experience.anchor()
                        state=sections.signal(SectionKind::Experience)
                    >
                        <div class="space-y-8">
                            {EXPERIENCE
                                .iter()
                                .map(|entry| {
                                    view! {
                                        <div class="transition-transform duration-200 hover:scale-[1.02]">
                                            <h3 class="font-semibold text-xl text-neutral-600">
                                                {entry.company}
                                            </h3>
                                            <p class="text-sm text-neutral-600 mb-4">
                                                {format!("{} | {}", entry.title, entry.period)}
                                            </p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Section>
                    <Section
                        title=SectionKind::Projects.title()
                        id=SectionKind::Projects.anchor()
                        state=sections.signal(SectionKind::Projects)
                    >
                        <div class="space-y-8">
                            {PROJECTS
                                .iter()
                                .map(|project| {
                                    view! {
                                        <div class="transition-transform duration-200 hover:scale-[1.02]">
                                            <h3 class="font-semibold text-xl text-neutral-600">
                                                {project.name}
                                            </h3>
                                            <p class="mb-4 text-neutral-600">{project.description}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Section>
                    <Section
                        title=SectionKind::Skills.title()
                        id=SectionKind::Skills.anchor()
                        state=sections.signal(SectionKind::Skills)
                    >
                        <BadgeList skills=SKILLS />
                    </Section>
                </div>
                <SocialLinks />
                <ResumeDownload config />
            </div>
            <footer class="py-8 text-center text-neutral-400">
                <p>
                    {match now {
                        Some(now) => copyright_line(&now),
                        None => current_copyright_line(),
                    }}
                </p>
            </footer>
        </div>
    }
}

#[component]
fn ProfileHeader() -> impl IntoView {
    view! {
        <div class="mb-16 text-center fade-in-down">
            <div class="w-40 h-40 mx-auto mb-8 rounded-full overflow-hidden">
                <img
                    src=PROFILE.photo
                    alt=PROFILE.photo_alt
                    class="w-full h-full object-cover"
                />
            </div>
            <h1 class="text-5xl font-bold mb-4 text-neutral-600">{PROFILE.name}</h1>
            <p class="text-2xl text-neutral-600">{PROFILE.role}</p>
        </div>
    }
}

#[component]
fn SocialLinks() -> impl IntoView {
    view! {
        <div class="mt-16 text-center fade-in-up">
            <div class="flex justify-center space-x-8 mb-8">
                {SOCIAL_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <a
                                href=link.href
                                target=link.target()
                                rel=link.rel()
                                aria-label=link.kind.label()
                                class="text-neutral-600 hover:text-neutral-400 transition-colors text-3xl"
                            >
                                <i class=link.kind.icon_class()></i>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Unfinished feature: only rendered when the site config turns it on.
#[component]
fn ResumeDownload(config: SiteConfig) -> impl IntoView {
    config
        .show_resume_download
        .then(|| {
            view! {
                <div class="flex justify-center">
                    <a
                        href=config.resume_href
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex px-6 py-3 bg-neutral-100 text-black rounded-full shadow-lg items-center justify-center transition-transform hover:scale-105 active:scale-95"
                    >
                        <i class="extra-download mr-2" />
                        "Download Resume"
                    </a>
                </div>
            }
        })
}
