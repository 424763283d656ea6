mod about;
mod contact;
mod experience;
mod footer;
mod hero;
mod hobbies;
mod hooks;
mod journey;
mod navigation;
mod skills;

use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{portfolio, ContentError, Portfolio};

use about::AboutSection;
use contact::ContactSection;
use experience::ExperienceSection;
use footer::Footer;
use hero::HeroSection;
use hobbies::HobbiesSection;
use journey::JourneySection;
use navigation::Navigation;
use skills::SkillsSection;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-body bg-background text-foreground">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let owner = portfolio()
        .map(|p| p.profile.name.clone())
        .unwrap_or_else(|_| "Portfolio".to_string());

    view! {
        <Title formatter=move |title| format!("{owner} - {title}") />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=IndexPage />
            </Routes>
        </Router>
    }
}

#[component]
fn IndexPage() -> impl IntoView {
    match portfolio() {
        Ok(portfolio) => Either::Left(view! { <PortfolioPage portfolio=portfolio /> }),
        Err(err) => {
            log::error!("content failed validation: {err}");
            Either::Right(view! { <ContentErrorPage err=err /> })
        }
    }
}

/// The whole site: every section in page order.
#[component]
fn PortfolioPage(portfolio: &'static Portfolio) -> impl IntoView {
    let Portfolio {
        profile,
        layout,
        navigation,
        about,
        skills,
        experience,
        journey,
        hobbies,
        contact,
        footer_tagline,
    } = portfolio;

    view! {
        <Title text="Portfolio" />
        <main class="min-h-screen bg-background">
            <Navigation brand=profile.brand.clone() items=navigation.clone() />
            <HeroSection profile=profile.clone() variant=layout.hero />
            <AboutSection about=about.clone() />
            <SkillsSection categories=skills.clone() />
            <ExperienceSection experience=experience.clone() variant=layout.experience />
            <JourneySection journey=journey.clone() />
            {(!hobbies.is_empty())
                .then(|| view! { <HobbiesSection hobbies=hobbies.clone() /> })}
            <ContactSection email=profile.email.clone() contact=contact.clone() />
            <Footer name=profile.name.clone() tagline=footer_tagline.clone() />
        </main>
    }
}

#[component]
fn ContentErrorPage(err: ContentError) -> impl IntoView {
    view! {
        <Title text="Content error" />
        <main class="min-h-screen flex items-center justify-center p-8">
            <div class="max-w-2xl p-6 rounded-md border border-red-500/40 bg-red-500/10">
                <h1 class="font-bold text-xl mb-2">"The portfolio content could not be loaded"</h1>
                <pre class="whitespace-pre-wrap text-sm">{err.to_string()}</pre>
            </div>
        </main>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::content::Hobby;

    fn render(portfolio: Portfolio) -> String {
        let portfolio: &'static Portfolio = Box::leak(Box::new(portfolio));
        Owner::new().with(|| {
            provide_meta_context();
            view! { <PortfolioPage portfolio=portfolio /> }.to_html()
        })
    }

    fn fixture() -> Portfolio {
        Portfolio::embedded().expect("embedded content should be valid")
    }

    fn positions(html: &str, markers: &[&str]) -> Vec<usize> {
        markers
            .iter()
            .map(|m| html.find(m).unwrap_or_else(|| panic!("missing {m}")))
            .collect()
    }

    #[test]
    fn test_sections_render_in_page_order() {
        let mut portfolio = fixture();
        portfolio.hobbies = vec![Hobby {
            name: "Chess".to_string(),
            icon: "extra-chess".to_string(),
            description: "Endgames mostly".to_string(),
            color: "bg-primary/10".to_string(),
        }];
        let html = render(portfolio);

        let order = positions(
            &html,
            &[
                "<header",
                r#"id="home""#,
                r#"id="about""#,
                r#"id="skills""#,
                r#"id="experience""#,
                r#"id="journey""#,
                r#"id="hobbies""#,
                r#"id="contact""#,
                "<footer",
            ],
        );
        assert!(order.windows(2).all(|w| w[0] < w[1]), "out of order: {order:?}");
    }

    #[test]
    fn test_hobbies_omitted_when_empty() {
        let mut portfolio = fixture();
        portfolio.hobbies.clear();
        let html = render(portfolio);

        assert!(!html.contains(r#"id="hobbies""#));
        let order = positions(&html, &[r#"id="journey""#, r#"id="contact""#, "<footer"]);
        assert!(order.windows(2).all(|w| w[0] < w[1]));
    }
}
