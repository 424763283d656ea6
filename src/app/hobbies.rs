use leptos::prelude::*;

use crate::{content::Hobby, motion::stagger_delay_ms};

use super::hooks::Reveal;

#[component]
pub fn HobbiesSection(hobbies: Vec<Hobby>) -> impl IntoView {
    view! {
        <section id="hobbies" class="section-padding bg-card">
            <div class="container mx-auto">
                <Reveal wrapper_class="text-center mb-16">
                    <p class="font-body text-sm uppercase tracking-[0.3em] text-primary mb-4">
                        "Beyond Work"
                    </p>
                    <h2 class="font-heading text-4xl md:text-5xl font-bold text-foreground">
                        "Personal Interests"
                    </h2>
                </Reveal>
                <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-6">
                    {hobbies
                        .into_iter()
                        .enumerate()
                        .map(|(i, hobby)| {
                            view! {
                                <Reveal
                                    delay_ms=stagger_delay_ms(i, 0, 100)
                                    wrapper_class="bg-background p-6 rounded-2xl shadow-soft hover:shadow-elevated hover:scale-[1.02] cursor-pointer group"
                                >
                                    <div class=format!(
                                        "w-14 h-14 rounded-xl {} flex items-center justify-center mb-4 group-hover:scale-110 transition-transform duration-300",
                                        hobby.color,
                                    )>
                                        <i class=format!("{} text-2xl", hobby.icon)></i>
                                    </div>
                                    <h3 class="font-heading text-xl font-semibold text-foreground mb-2 group-hover:text-primary transition-colors">
                                        {hobby.name}
                                    </h3>
                                    <p class="font-body text-muted-foreground text-sm leading-relaxed">
                                        {hobby.description}
                                    </p>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
