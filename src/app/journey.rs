use leptos::{html, prelude::*};

use crate::{
    content::{Journey, JourneyItem, Moment, TileSize},
    motion::{stagger_delay_ms, HeaderParallax},
};

use super::hooks::{use_section_progress, Reveal};

const HEADER_DISTANCE_PX: f64 = 80.0;

fn tile_class(size: TileSize) -> &'static str {
    match size {
        TileSize::Large => "md:col-span-2 lg:col-span-1 lg:row-span-2",
        TileSize::Medium | TileSize::Small => "",
    }
}

#[component]
pub fn JourneySection(journey: Journey) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let progress = use_section_progress(section_ref);
    let header_style = move || HeaderParallax::from_ratio(progress.get(), HEADER_DISTANCE_PX).style();
    let Journey { items, moments } = journey;

    view! {
        <section id="journey" node_ref=section_ref class="section-padding relative overflow-hidden">
            <div class="absolute top-1/4 right-0 w-[600px] h-[600px] bg-accent/10 rounded-full blur-[150px] -z-10"></div>
            <div class="absolute bottom-1/4 left-0 w-[500px] h-[500px] bg-primary/10 rounded-full blur-[120px] -z-10"></div>
            <div class="container mx-auto">
                <div class="text-center mb-20" style=header_style>
                    <span class="inline-block font-body text-sm text-accent uppercase tracking-widest mb-4">
                        "Beyond The Code"
                    </span>
                    <h2 class="font-heading text-4xl md:text-6xl font-semibold text-foreground mb-6">
                        "Life Journey"
                    </h2>
                    <p class="font-body text-lg text-muted-foreground max-w-xl mx-auto">
                        "The moments that shape who I am"
                    </p>
                </div>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-5 mb-12">
                    {items
                        .into_iter()
                        .enumerate()
                        .map(|(i, item)| {
                            let span = tile_class(item.size);
                            view! {
                                <Reveal delay_ms=stagger_delay_ms(i, 0, 100) wrapper_class=span>
                                    <JourneyTile item=item />
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
                {(!moments.is_empty())
                    .then(|| {
                        view! {
                            <Reveal delay_ms=300 wrapper_class="glass rounded-3xl p-8">
                                <MiniMoments moments=moments />
                            </Reveal>
                        }
                    })}
            </div>
        </section>
    }
}

#[component]
fn JourneyTile(item: JourneyItem) -> impl IntoView {
    view! {
        <div class="h-full glass rounded-3xl p-8 glow-border group cursor-default hover:-translate-y-1.5 transition-transform duration-300">
            <div class="w-12 h-12 rounded-2xl bg-muted/50 flex items-center justify-center mb-6 group-hover:bg-primary/10 transition-colors duration-500">
                <i class=format!(
                    "{} text-2xl text-muted-foreground group-hover:text-primary transition-colors duration-500",
                    item.icon,
                )></i>
            </div>
            <span class="font-body text-xs text-muted-foreground uppercase tracking-wider">
                {item.subtitle}
            </span>
            <h3 class="font-heading text-2xl font-semibold text-foreground mt-1 mb-4 group-hover:text-primary transition-colors duration-300">
                {item.title}
            </h3>
            <p class="font-body text-sm text-muted-foreground mb-6 leading-relaxed">
                {item.description}
            </p>
            <div class="flex flex-wrap gap-2">
                {item
                    .highlights
                    .into_iter()
                    .map(|h| {
                        view! {
                            <span class="px-3 py-1.5 bg-background/40 rounded-lg font-body text-xs text-foreground/70">
                                {h}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn MiniMoments(moments: Vec<Moment>) -> impl IntoView {
    view! {
        <p class="font-body text-sm text-muted-foreground text-center mb-8">
            "Little things that bring joy"
        </p>
        <div class="flex flex-wrap justify-center gap-8 md:gap-16">
            {moments
                .into_iter()
                .map(|moment| {
                    view! {
                        <div class="flex flex-col items-center gap-3 group cursor-default hover:scale-110 hover:-translate-y-1 transition-transform">
                            <div class="w-14 h-14 rounded-2xl bg-muted/30 flex items-center justify-center group-hover:bg-primary/10 transition-all duration-300">
                                <i class=format!(
                                    "{} text-2xl text-muted-foreground group-hover:text-primary transition-colors duration-300",
                                    moment.icon,
                                )></i>
                            </div>
                            <span class="font-body text-xs text-muted-foreground group-hover:text-foreground transition-colors">
                                {moment.label}
                            </span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
