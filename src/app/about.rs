use leptos::prelude::*;

use crate::{content::About, motion::stagger_delay_ms};

use super::hooks::Reveal;

#[component]
pub fn AboutSection(about: About) -> impl IntoView {
    let About {
        heading,
        paragraphs,
        facts,
    } = about;

    view! {
        <section id="about" class="section-padding bg-card">
            <div class="container mx-auto">
                <Reveal wrapper_class="text-center mb-16">
                    <p class="font-body text-sm uppercase tracking-[0.3em] text-primary mb-4">
                        "Get to know me"
                    </p>
                    <h2 class="font-heading text-4xl md:text-5xl font-bold text-foreground">
                        "About Me"
                    </h2>
                </Reveal>
                <div class="grid md:grid-cols-2 gap-12 lg:gap-20 items-center">
                    <Reveal wrapper_class="relative">
                        <div class="absolute -inset-4 bg-primary/10 rounded-2xl -rotate-3"></div>
                        <div class="relative aspect-[4/5] bg-secondary rounded-2xl overflow-hidden">
                            <div class="absolute inset-0 flex items-center justify-center text-muted-foreground">
                                <p class="font-body text-sm">"Your Photo Here"</p>
                            </div>
                        </div>
                    </Reveal>
                    <Reveal delay_ms=200>
                        <h3 class="font-heading text-2xl md:text-3xl font-semibold text-foreground mb-6">
                            {heading}
                        </h3>
                        <div class="space-y-4 text-muted-foreground font-body leading-relaxed mb-8">
                            {paragraphs.into_iter().map(|p| view! { <p>{p}</p> }).collect_view()}
                        </div>
                        <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
                            {facts
                                .into_iter()
                                .enumerate()
                                .map(|(i, fact)| {
                                    view! {
                                        <Reveal
                                            delay_ms=stagger_delay_ms(i, 400, 100)
                                            wrapper_class="p-4 bg-background rounded-xl"
                                        >
                                            <i class=format!("{} text-primary mb-2", fact.icon)></i>
                                            <p class="font-body text-xs text-muted-foreground mb-1">
                                                {fact.label}
                                            </p>
                                            <p class="font-body text-sm font-medium text-foreground">
                                                {fact.value}
                                            </p>
                                        </Reveal>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
