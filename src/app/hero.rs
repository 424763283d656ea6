use leptos::prelude::*;

use crate::{
    content::{HeroVariant, Profile},
    motion::{hero_parallax_px, stagger_delay_ms},
};

use super::hooks::use_scroll_offset;

const STAGGER_BASE_MS: u32 = 300;
const STAGGER_STEP_MS: u32 = 200;

fn stagger_style(index: usize) -> String {
    format!(
        "animation-delay: {}ms",
        stagger_delay_ms(index, STAGGER_BASE_MS, STAGGER_STEP_MS)
    )
}

#[component]
pub fn HeroSection(profile: Profile, variant: HeroVariant) -> impl IntoView {
    // only the parallax layout subscribes to scroll
    let drift = match variant {
        HeroVariant::Parallax => {
            let offset = use_scroll_offset();
            Signal::derive(move || hero_parallax_px(offset.get()))
        }
        HeroVariant::Static => Signal::stored(0.0),
    };
    let drift_style = move || format!("transform: translateY({:.1}px)", drift.get());

    view! {
        <section id="home" class="min-h-screen flex items-center justify-center relative overflow-hidden">
            <div class="absolute inset-0 -z-10" style="background: var(--gradient-warm)"></div>
            // drift and grow-in both set `transform`, so they live on separate elements
            <div class="absolute top-1/4 right-1/4 w-96 h-96" style=drift_style data-hero-glow="drift">
                <div
                    class="w-full h-full bg-primary/10 rounded-full blur-3xl animate-grow-in"
                    data-hero-glow="grow"
                ></div>
            </div>
            <div class="container mx-auto px-6 text-center">
                <p
                    class="hero-item font-body text-sm uppercase tracking-[0.3em] text-muted-foreground mb-4"
                    style=stagger_style(0)
                >
                    {profile.greeting}
                </p>
                <h1
                    class="hero-item font-heading text-5xl md:text-7xl lg:text-8xl font-bold text-foreground mb-6 leading-tight"
                    style=stagger_style(1)
                >
                    {profile.name}
                </h1>
                <p
                    class="hero-item font-body text-lg md:text-xl text-muted-foreground max-w-2xl mx-auto mb-8"
                    style=stagger_style(2)
                >
                    {profile.tagline}
                </p>
                <div
                    class="hero-item flex flex-col sm:flex-row gap-4 justify-center items-center"
                    style=stagger_style(3)
                >
                    <a
                        href="#experience"
                        class="px-8 py-4 bg-primary text-primary-foreground font-body font-medium rounded-full hover:shadow-elevated transition-all duration-300 hover:-translate-y-1"
                    >
                        "View My Work"
                    </a>
                    <a
                        href="#contact"
                        class="px-8 py-4 border border-foreground/20 text-foreground font-body font-medium rounded-full hover:bg-foreground/5 transition-all duration-300"
                    >
                        "Get in Touch"
                    </a>
                </div>
                <div class="absolute bottom-12 left-1/2 -translate-x-1/2 hero-item" style="animation-delay: 1500ms">
                    <i class="extra-arrow-down text-2xl text-muted-foreground animate-bounce"></i>
                </div>
            </div>
        </section>
    }
}
