use leptos::{html, prelude::*};

use crate::{
    content::SkillCategory,
    motion::{stagger_delay_ms, HeaderParallax},
};

use super::hooks::{use_section_progress, Reveal};

const HEADER_DISTANCE_PX: f64 = 60.0;

/// 3+2 layout on a six column grid: the first row holds three tiles, the rest two.
fn tile_span(index: usize) -> &'static str {
    if index < 3 {
        "group lg:col-span-2"
    } else {
        "group lg:col-span-3"
    }
}

#[component]
pub fn SkillsSection(categories: Vec<SkillCategory>) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let progress = use_section_progress(section_ref);
    let header_style = move || HeaderParallax::from_ratio(progress.get(), HEADER_DISTANCE_PX).style();

    view! {
        <section
            id="skills"
            node_ref=section_ref
            class="section-padding relative overflow-hidden"
            style="background: var(--gradient-section)"
        >
            <div class="container mx-auto">
                <div class="text-center mb-20" style=header_style>
                    <span class="inline-block font-body text-sm text-primary uppercase tracking-widest mb-4">
                        "Technical Expertise"
                    </span>
                    <h2 class="font-heading text-4xl md:text-6xl font-semibold text-foreground mb-6">
                        "Skills & Tools"
                    </h2>
                    <p class="font-body text-lg text-muted-foreground max-w-xl mx-auto">
                        "A comprehensive overview of my technical stack and data capabilities."
                    </p>
                </div>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-6 gap-8">
                    {categories
                        .into_iter()
                        .enumerate()
                        .map(|(index, category)| {
                            view! {
                                <Reveal
                                    delay_ms=stagger_delay_ms(index, 0, 100)
                                    wrapper_class=tile_span(index)
                                >
                                    <SkillCard category=category index=index />
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(category: SkillCategory, index: usize) -> impl IntoView {
    let SkillCategory {
        title,
        description,
        icon,
        gradient,
        skills,
    } = category;

    view! {
        <div class="h-full glass rounded-[2.5rem] p-8 glow-border flex flex-col cursor-pointer tilt-on-hover active:scale-[0.97] transition-transform">
            <div class=format!(
                "w-16 h-16 rounded-2xl bg-gradient-to-br {gradient} flex items-center justify-center mb-6 shadow-lg shadow-black/20 hover:rotate-12 hover:scale-110 transition-transform",
            )>
                <i class=format!("{icon} text-3xl text-foreground")></i>
            </div>
            <h3 class="font-heading text-2xl font-semibold text-foreground mb-2 group-hover:text-primary transition-colors">
                {title}
            </h3>
            <p class="font-body text-sm text-muted-foreground mb-8 leading-relaxed">{description}</p>
            <div class="grid grid-cols-2 gap-3 mt-auto">
                {skills
                    .into_iter()
                    .enumerate()
                    .map(|(i, skill)| {
                        let delay = stagger_delay_ms(index, 0, 100).saturating_add(stagger_delay_ms(i, 0, 50));
                        view! {
                            <div
                                class="flex items-center gap-2.5 p-3 bg-white/5 rounded-xl border border-white/5 group/skill hover:scale-105 hover:bg-white/10 transition-all"
                                style=format!("transition-delay: {delay}ms")
                            >
                                <i class=format!(
                                    "{} text-muted-foreground group-hover/skill:text-primary transition-colors",
                                    skill.icon,
                                )></i>
                                <span class="font-body text-sm text-foreground/80 group-hover/skill:text-white">
                                    {skill.name}
                                </span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
