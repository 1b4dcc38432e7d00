//! Content for each page section.
//!
//! The portfolio page owns the `<section>` elements (they carry the node refs
//! the scroll tracker measures); these components render only what goes
//! inside them.

use leptos::ev;
use leptos::prelude::*;

#[cfg(test)]
#[path = "sections_test.rs"]
mod sections_test;

/// Filter value that matches every item.
pub const ALL_CATEGORIES: &str = "All";

/// Recipient of the contact form.
pub const CONTACT_EMAIL: &str = "hello@example.com";

/// Content item that can be narrowed by category.
pub trait Categorized {
    fn categories(&self) -> &[&'static str];
}

struct Project {
    title: &'static str,
    description: &'static str,
    tech: &'static [&'static str],
    categories: &'static [&'static str],
}

impl Categorized for Project {
    fn categories(&self) -> &[&'static str] {
        self.categories
    }
}

struct Post {
    title: &'static str,
    date: &'static str,
    category: &'static str,
}

impl Categorized for Post {
    fn categories(&self) -> &[&'static str] {
        std::slice::from_ref(&self.category)
    }
}

const PROJECTS: &[Project] = &[
    Project {
        title: "E-Commerce Platform",
        description: "Full-stack storefront with payments, accounts, and product management.",
        tech: &["Rust", "Axum", "Postgres"],
        categories: &["Web", "Full Stack"],
    },
    Project {
        title: "Task Board",
        description: "Kanban board with drag-and-drop cards and shared team boards.",
        tech: &["Leptos", "WebSockets"],
        categories: &["Web", "Frontend"],
    },
    Project {
        title: "Weather Dashboard",
        description: "Live conditions, forecasts, and history for saved locations.",
        tech: &["Rust", "Charts", "REST"],
        categories: &["Web", "API"],
    },
    Project {
        title: "Social Mobile App",
        description: "Cross-platform social app with realtime messaging and sharing.",
        tech: &["Tauri", "SQLite"],
        categories: &["Mobile"],
    },
    Project {
        title: "Image Recognition Tool",
        description: "Classifies objects in uploaded images behind a small HTTP API.",
        tech: &["Python", "ONNX", "Axum"],
        categories: &["AI/ML", "API"],
    },
];

const SKILLS: &[(&str, u8)] = &[
    ("Rust", 90),
    ("TypeScript", 80),
    ("HTML/CSS", 95),
    ("SQL", 75),
    ("Python", 70),
];

const POSTS: &[Post] = &[
    Post { title: "Responsive layouts without a framework", date: "June 15, 2023", category: "CSS" },
    Post { title: "Profiling a WASM front end", date: "May 22, 2023", category: "Frontend" },
    Post { title: "Building a REST API with Axum", date: "April 10, 2023", category: "Backend" },
    Post { title: "Session tokens done right", date: "March 5, 2023", category: "Security" },
    Post { title: "Grid or flexbox?", date: "February 18, 2023", category: "CSS" },
];

/// Items matching `selected`; [`ALL_CATEGORIES`] keeps everything.
pub fn filter_by_category<'a, T: Categorized>(items: &'a [T], selected: &str) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| selected == ALL_CATEGORIES || item.categories().iter().any(|c| *c == selected))
        .collect()
}

/// Filter options: [`ALL_CATEGORIES`] then each category in first-seen order.
pub fn categories<T: Categorized>(items: &[T]) -> Vec<&'static str> {
    let mut options = vec![ALL_CATEGORIES];
    for category in items.iter().flat_map(|item| item.categories().iter().copied()) {
        if !options.contains(&category) {
            options.push(category);
        }
    }
    options
}

/// CSS class for a category filter button.
pub fn filter_button_class(active: bool) -> &'static str {
    if active { "filter__button filter__button--active" } else { "filter__button" }
}

/// Contact form fields as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Build the `mailto:` link for a filled-in form.
///
/// # Errors
///
/// Returns the message to show when a required field is blank.
pub fn contact_mailto(form: &ContactForm) -> Result<String, &'static str> {
    let name = form.name.trim();
    let email = form.email.trim();
    let message = form.message.trim();
    if name.is_empty() || email.is_empty() || message.is_empty() {
        return Err("Please fill in all required fields.");
    }
    let subject = format!("Portfolio contact from {name}");
    let body = format!("Name: {name}\nEmail: {email}\n\n{message}");
    Ok(format!(
        "mailto:{CONTACT_EMAIL}?subject={}&body={}",
        urlencoding::encode(&subject),
        urlencoding::encode(&body)
    ))
}

/// Inline width for a skill meter.
pub fn skill_meter_width(percent: u8) -> String {
    format!("{}%", percent.min(100))
}

#[component]
fn SectionTitle(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="section-title">
            <h2 class="section-title__heading">{title}</h2>
            <p class="section-title__subtitle">{subtitle}</p>
        </div>
    }
}

#[component]
fn CategoryFilter(options: Vec<&'static str>, selected: RwSignal<&'static str>) -> impl IntoView {
    let buttons = options
        .into_iter()
        .map(|option| {
            view! {
                <button
                    class=move || filter_button_class(selected.get() == option)
                    on:click=move |_| selected.set(option)
                >
                    {option}
                </button>
            }
        })
        .collect::<Vec<_>>();
    view! { <div class="filter">{buttons}</div> }
}

#[component]
pub fn Hero(#[prop(into)] dark: Signal<bool>, on_navigate: Callback<String>) -> impl IntoView {
    let go = move |id: &'static str| move |_: ev::MouseEvent| on_navigate.run(id.to_owned());
    view! {
        <div class="hero" class:hero--dark=move || dark.get()>
            <span class="hero__badge">"Full Stack Developer"</span>
            <h1 class="hero__title">
                "Building " <em>"digital experiences"</em> " that " <em>"inspire"</em>
            </h1>
            <p class="hero__lead">
                "I build fast, reliable web applications from the database to the browser."
            </p>
            <div class="hero__actions">
                <button class="btn btn--primary" on:click=go("contact")>"Get in Touch"</button>
                <button class="btn btn--outline" on:click=go("projects")>"View Projects"</button>
            </div>
            <button class="hero__scroll-down" on:click=go("about")>"Scroll Down"</button>
        </div>
    }
}

#[component]
pub fn About(#[prop(into)] dark: Signal<bool>) -> impl IntoView {
    view! {
        <div class="about" class:about--dark=move || dark.get()>
            <SectionTitle title="About Me" subtitle="Who I am and what I do"/>
            <p>
                "I'm a developer who enjoys turning rough ideas into dependable software. "
                "Most of my work spans backend services and the interfaces on top of them."
            </p>
        </div>
    }
}

#[component]
pub fn Projects(#[prop(into)] dark: Signal<bool>) -> impl IntoView {
    let selected = RwSignal::new(ALL_CATEGORIES);
    let cards = move || {
        filter_by_category(PROJECTS, selected.get())
            .into_iter()
            .map(|p| {
                let tags = p.tech.iter().map(|t| view! { <li class="tag">{*t}</li> }).collect::<Vec<_>>();
                view! {
                    <article class="project-card">
                        <h3>{p.title}</h3>
                        <p>{p.description}</p>
                        <ul class="project-card__tags">{tags}</ul>
                    </article>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="projects" class:projects--dark=move || dark.get()>
            <SectionTitle title="Projects" subtitle="Selected recent work"/>
            <CategoryFilter options=categories(PROJECTS) selected=selected/>
            <div class="projects__grid">{cards}</div>
        </div>
    }
}

#[component]
pub fn Skills(#[prop(into)] dark: Signal<bool>) -> impl IntoView {
    let meters = SKILLS
        .iter()
        .map(|&(name, percent)| {
            view! {
                <div class="skill">
                    <div class="skill__header">
                        <span>{name}</span>
                        <span>{format!("{percent}%")}</span>
                    </div>
                    <div class="skill__track">
                        <div class="skill__fill" style:width=skill_meter_width(percent)></div>
                    </div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="skills" class:skills--dark=move || dark.get()>
            <SectionTitle title="Skills & Expertise" subtitle="Technical and professional abilities"/>
            {meters}
        </div>
    }
}

#[component]
pub fn Blog(#[prop(into)] dark: Signal<bool>) -> impl IntoView {
    let selected = RwSignal::new(ALL_CATEGORIES);
    let posts = move || {
        filter_by_category(POSTS, selected.get())
            .into_iter()
            .map(|post| {
                view! {
                    <article class="post-card">
                        <span class="tag">{post.category}</span>
                        <h3>{post.title}</h3>
                        <time>{post.date}</time>
                    </article>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="blog" class:blog--dark=move || dark.get()>
            <SectionTitle title="Blog & Articles" subtitle="Notes on building for the web"/>
            <CategoryFilter options=categories(POSTS) selected=selected/>
            <div class="blog__grid">{posts}</div>
        </div>
    }
}

#[component]
pub fn Contact(#[prop(into)] dark: Signal<bool>) -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let status = RwSignal::new(None::<Result<(), &'static str>>);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match contact_mailto(&form.get_untracked()) {
            Ok(link) => {
                open_mail_client(&link);
                form.set(ContactForm::default());
                status.set(Some(Ok(())));
            }
            Err(message) => status.set(Some(Err(message))),
        }
    };

    view! {
        <div class="contact" class:contact--dark=move || dark.get()>
            <SectionTitle title="Get in Touch" subtitle="Have a project in mind? Say hello."/>
            <form class="contact__form" on:submit=on_submit>
                <input
                    class="contact__input"
                    type="text"
                    name="name"
                    placeholder="Name"
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                />
                <input
                    class="contact__input"
                    type="email"
                    name="email"
                    placeholder="Email"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                />
                <textarea
                    class="contact__input"
                    name="message"
                    rows="5"
                    placeholder="Message"
                    prop:value=move || form.with(|f| f.message.clone())
                    on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                ></textarea>
                <button class="btn btn--primary" type="submit">"Send Message"</button>
                {move || {
                    status.get().map(|result| {
                        let is_error = result.is_err();
                        let message = result.map_or_else(str::to_owned, |()| {
                            format!("Opening your email client. If nothing happens, write to {CONTACT_EMAIL}.")
                        });
                        view! {
                            <p class="contact__status" class:contact__status--error=is_error>{message}</p>
                        }
                    })
                }}
            </form>
        </div>
    }
}

fn open_mail_client(link: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(link);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = link;
    }
}

/// Content for the section with `id`; empty for ids without a body.
pub fn section_body(id: &str, dark: Signal<bool>, on_navigate: Callback<String>) -> AnyView {
    match id {
        "home" => view! { <Hero dark=dark on_navigate=on_navigate/> }.into_any(),
        "about" => view! { <About dark=dark/> }.into_any(),
        "projects" => view! { <Projects dark=dark/> }.into_any(),
        "skills" => view! { <Skills dark=dark/> }.into_any(),
        "blog" => view! { <Blog dark=dark/> }.into_any(),
        "contact" => view! { <Contact dark=dark/> }.into_any(),
        _ => ().into_any(),
    }
}
