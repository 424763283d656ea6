use leptos::prelude::*;

use crate::{
    content::{mailto_href, Contact, SocialLink},
    motion::stagger_delay_ms,
};

use super::hooks::Reveal;

#[component]
pub fn ContactSection(email: String, contact: Contact) -> impl IntoView {
    let Contact { blurb, links } = contact;

    view! {
        <section id="contact" class="section-padding">
            <div class="container mx-auto">
                <Reveal wrapper_class="max-w-3xl mx-auto text-center">
                    <p class="font-body text-sm uppercase tracking-[0.3em] text-primary mb-4">
                        "Let's Connect"
                    </p>
                    <h2 class="font-heading text-4xl md:text-5xl lg:text-6xl font-bold text-foreground mb-6">
                        "Get In Touch"
                    </h2>
                    <p class="font-body text-lg text-muted-foreground mb-12 max-w-xl mx-auto">
                        {blurb}
                    </p>
                    <a
                        href=mailto_href(&email)
                        class="inline-flex items-center gap-3 px-8 py-4 bg-primary text-primary-foreground font-body font-medium rounded-full hover:shadow-elevated hover:scale-105 active:scale-95 transition-all duration-300 mb-12"
                    >
                        <i class="extra-email"></i>
                        {email.clone()}
                        <i class="extra-arrow-up-right"></i>
                    </a>
                    <SocialLinks links=links />
                </Reveal>
            </div>
        </section>
    }
}

/// One outbound anchor per configured link; hrefs are passed through untouched.
#[component]
pub fn SocialLinks(links: Vec<SocialLink>) -> impl IntoView {
    view! {
        <div class="flex justify-center gap-4">
            {links
                .into_iter()
                .enumerate()
                .map(|(i, link)| {
                    view! {
                        <a
                            href=link.href
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label=link.label
                            data-social-link="true"
                            class="w-12 h-12 bg-card rounded-full flex items-center justify-center text-muted-foreground hover:text-primary hover:shadow-soft hover:scale-110 hover:-translate-y-0.5 transition-all duration-300"
                            style=format!("transition-delay: {}ms", stagger_delay_ms(i, 200, 100))
                        >
                            <i class=format!("{} text-xl", link.icon)></i>
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}
