use chrono::{DateTime, Datelike, TimeZone, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub photo: &'static str,
    pub photo_alt: &'static str,
    pub bio: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub company: &'static str,
    pub title: &'static str,
    pub period: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectEntry {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialKind {
    Mail,
    GitHub,
    LinkedIn,
    Twitter,
}

impl SocialKind {
    pub fn icon_class(&self) -> &'static str {
        match self {
            Self::Mail => "extra-email",
            Self::GitHub => "devicon-github-plain",
            Self::LinkedIn => "devicon-linkedin-plain",
            Self::Twitter => "devicon-twitter-original",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Mail => "Email",
            Self::GitHub => "GitHub Profile",
            Self::LinkedIn => "LinkedIn Profile",
            Self::Twitter => "X Profile",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub href: &'static str,
}

impl SocialLink {
    /// Web profiles open in a new browsing context; `mailto:` hands off to the mail client.
    pub fn opens_new_context(&self) -> bool {
        !self.href.starts_with("mailto:")
    }

    pub fn target(&self) -> Option<&'static str> {
        self.opens_new_context().then_some("_blank")
    }

    pub fn rel(&self) -> Option<&'static str> {
        self.opens_new_context().then_some("noopener noreferrer")
    }
}

pub const PROFILE: Profile = Profile {
    name: "Mayank Verma",
    role: "Full Stack Developer",
    photo: "/me.gif",
    photo_alt: "Mayank Verma",
    bio: "I'm a Full stack Developer with expertise in  the MERN stack. \
          I am passionate about building tech. \
          I focus on creating efficient, scalable solutions that make an impact.",
};

pub const EXPERIENCE: &[ExperienceEntry] = &[ExperienceEntry {
    company: "InnoByte Services",
    title: "Web Developer Intern",
    period: "Current Role since December 2024",
}];

pub const PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        name: "Medium",
        description: "The Medium blogging platform allows users to seamlessly create, update, \
            and fetch blogs. Built with modern technologies, the project uses Hono and Cloudflare \
            Workers for the backend, ensuring high performance and serverless deployment. \
            TypeScript provides type safety, while JWT secures authentication and Zod handles \
            validation. The frontend leverages React for a dynamic user interface, styled with \
            TailwindCSS. For data storage, PostgreSQL is paired with Prisma ORM and Prisma \
            Accelerate for efficient connection pooling. This stack ensures scalability, \
            security, and a smooth user experience.",
    },
    ProjectEntry {
        name: "Expense Tracker",
        description: "The Expense tracker application built with the MERN stack, allows users \
            to efficiently manage their finances. The app enables users to add, categorize, \
            update, and delete expenses, providing a clear overview of spending habits. This \
            offering flexibility for managing financial records. This application provides a \
            streamlined and user-friendly solution for personal finance management.",
    },
    ProjectEntry {
        name: "Text to Speech Converter",
        description: "Your Text-to-Speech (TTS) application converts written text into \
            natural-sounding speech, making content more accessible and engaging This app \
            allows users to input text and listen to it in multiple voices and languages. \
            This application is designed to help users with accessibility and language \
            learning, in an interactive and easy-to-use format.",
    },
];

pub const SKILLS: &[&str] = &[
    "React",
    "Node.js",
    "Express.js",
    "MongoDB",
    "PostgreSQL",
    "Prisma",
    "Hono",
    "AWS",
    "Docker",
    "Git",
    "Firebase",
    "Recoil",
    "Tailwind",
    "Zod",
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        kind: SocialKind::Mail,
        href: "mailto:maayannk123@gmail.com",
    },
    SocialLink {
        kind: SocialKind::GitHub,
        href: "https://github.com/maayannk/",
    },
    SocialLink {
        kind: SocialKind::LinkedIn,
        href: "https://www.linkedin.com/in/mayankverma/",
    },
    SocialLink {
        kind: SocialKind::Twitter,
        href: "https://x.com/maayannk12",
    },
];

pub fn copyright_line<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    format!("© {} {}", now.year(), PROFILE.name)
}

/// Reads the clock on every call so a long-lived page never shows a stale year.
pub fn current_copyright_line() -> String {
    copyright_line(&Utc::now())
}
