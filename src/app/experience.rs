use leptos::{either::Either, html, prelude::*};
use leptos_use::{use_mouse_in_element, UseMouseInElementReturn};

use crate::{
    content::{Experience, ExperienceRecord, ExperienceVariant},
    highlight::{KeywordHighlighter, Segment},
    motion::{stagger_delay_ms, CardFace, TimelineProjection},
};

use super::hooks::{use_section_progress, Reveal};

const FRONT_HEIGHT_PX: u32 = 480;
const BACK_HEIGHT_PX: u32 = 720;

// shared by the fill and the indicator
const TIMELINE_EASING: &str = "transition: height 300ms ease-out, top 300ms ease-out";

fn timeline_fill_style(timeline: TimelineProjection) -> String {
    format!("{}; {TIMELINE_EASING}", timeline.fill_style())
}

fn timeline_indicator_style(timeline: TimelineProjection) -> String {
    format!("{}; {TIMELINE_EASING}", timeline.indicator_style())
}

/// Soft glow centred on the pointer, in card-local pixels.
fn spotlight_style(x: f64, y: f64) -> String {
    let (x, y) = if x.is_finite() && y.is_finite() { (x, y) } else { (0.0, 0.0) };
    format!(
        "background: radial-gradient(600px circle at {x:.0}px {y:.0}px, rgba(41, 151, 255, 0.1), transparent 80%)"
    )
}

fn card_height_px(face: CardFace) -> u32 {
    match face {
        CardFace::Front => FRONT_HEIGHT_PX,
        CardFace::Back => BACK_HEIGHT_PX,
    }
}

fn card_style(face: CardFace) -> String {
    format!(
        "transform: rotateY({}deg); height: {}px; transform-style: preserve-3d",
        face.rotation_deg(),
        card_height_px(face)
    )
}

// the face that is not showing sits underneath so it can't take clicks
fn face_style(side: CardFace, showing: CardFace) -> String {
    let z = if side == showing { 1 } else { 0 };
    match side {
        CardFace::Front => format!("backface-visibility: hidden; z-index: {z}"),
        CardFace::Back => {
            format!("backface-visibility: hidden; transform: rotateY(180deg); z-index: {z}")
        }
    }
}

#[component]
pub fn ExperienceSection(experience: Experience, variant: ExperienceVariant) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let progress = use_section_progress(section_ref);
    let timeline = Memo::new(move |_| TimelineProjection::from_ratio(progress.get()));

    let highlighter = KeywordHighlighter::new(experience.keywords.as_slice()).unwrap_or_else(|e| {
        log::warn!("keyword highlighting disabled: {e}");
        KeywordHighlighter::default()
    });

    view! {
        <section
            id="experience"
            node_ref=section_ref
            class="py-32 relative overflow-hidden bg-black"
        >
            <BackgroundAura />
            <div class="container mx-auto px-4 relative z-10">
                <Reveal wrapper_class="text-center mb-28">
                    <span class="text-primary text-[11px] font-black uppercase tracking-[0.6em] mb-4 block">
                        "Professional Odyssey"
                    </span>
                    <h2 class="text-6xl md:text-8xl font-bold text-white tracking-tighter mb-8">
                        "Experience"
                    </h2>
                    <div class="inline-block glass px-6 py-3 border border-white/10 rounded-full">
                        <p class="text-muted-foreground text-sm md:text-lg tracking-wide">
                            {experience.summary}
                        </p>
                    </div>
                </Reveal>
                <div class="relative max-w-6xl mx-auto">
                    <Timeline timeline=timeline />
                    <ExperienceCards
                        records=experience.records
                        variant=variant
                        highlighter=highlighter
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn BackgroundAura() -> impl IntoView {
    view! {
        <div class="absolute inset-0 overflow-hidden pointer-events-none" aria-hidden="true">
            <div class="absolute top-[-5%] left-[-5%] w-[600px] h-[600px] bg-primary/10 blur-[140px] rounded-full animate-aura"></div>
            <div class="absolute bottom-[-10%] right-[-5%] w-[700px] h-[700px] bg-blue-500/10 blur-[160px] rounded-full animate-aura-reverse"></div>
        </div>
    }
}

/// Vertical track whose filled length and indicator both follow the section's scroll ratio.
#[component]
fn Timeline(timeline: Memo<TimelineProjection>) -> impl IntoView {
    view! {
        <div
            class="absolute left-0 md:left-12 top-0 bottom-0 w-[1px] bg-white/5 hidden md:block"
            aria-hidden="true"
        >
            <div
                class="timeline-fill absolute top-0 w-full bg-primary shadow-[0_0_20px_rgba(41,151,255,0.8)]"
                style=move || timeline_fill_style(timeline.get())
            ></div>
            <div
                class="timeline-indicator absolute -left-[5px] w-[11px] h-[11px] -translate-y-1/2 rounded-full bg-primary"
                style=move || timeline_indicator_style(timeline.get())
            ></div>
        </div>
    }
}

/// One flip card per record, in record order.
#[component]
pub fn ExperienceCards(
    records: Vec<ExperienceRecord>,
    variant: ExperienceVariant,
    #[prop(optional)] highlighter: KeywordHighlighter,
) -> impl IntoView {
    view! {
        <div class="space-y-24 md:pl-32 pl-0">
            {records
                .into_iter()
                .map(|record| {
                    view! {
                        <FlipCard record=record variant=variant highlighter=highlighter.clone() />
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn FlipCard(
    record: ExperienceRecord,
    variant: ExperienceVariant,
    highlighter: KeywordHighlighter,
) -> impl IntoView {
    let (face, set_face) = signal(CardFace::default());
    let card_ref = NodeRef::<html::Div>::new();
    let UseMouseInElementReturn {
        element_x,
        element_y,
        ..
    } = use_mouse_in_element(card_ref);
    let flip = move || {
        set_face.update(CardFace::toggle);
        log::debug!("experience card showing {}", face.get_untracked().as_str());
    };

    let ExperienceRecord {
        role,
        company,
        period,
        domain,
        description,
        skills,
        responsibilities,
    } = record;

    let (outer_class, front_footer, back_footer) = match variant {
        ExperienceVariant::Flip => (
            "group relative w-full cursor-pointer",
            Either::Left(view! {
                <div class="mt-auto pt-6 border-t border-white/5 flex items-center justify-between text-primary text-xs font-black uppercase tracking-[0.3em]">
                    <div class="flex items-center gap-3">
                        <i class="extra-zap animate-pulse"></i>
                        <span>"Click to View Impact & Results"</span>
                    </div>
                    <i class="extra-rotate group-hover:rotate-180 transition-transform duration-700"></i>
                </div>
            }),
            Either::Left(view! {
                <div class="mt-6 pt-4 text-center border-t border-white/5">
                    <span class="text-primary/40 font-bold text-[9px] uppercase tracking-[0.5em]">
                        "Click to return to overview"
                    </span>
                </div>
            }),
        ),
        ExperienceVariant::Disclosure => (
            "group relative w-full",
            Either::Right(view! {
                <div class="mt-auto pt-6 border-t border-white/5 flex justify-end">
                    <button
                        type="button"
                        class="text-primary text-xs font-black uppercase tracking-[0.3em] hover:underline"
                        on:click=move |_| flip()
                    >
                        "View details"
                    </button>
                </div>
            }),
            Either::Right(view! {
                <div class="mt-6 pt-4 flex justify-center border-t border-white/5">
                    <button
                        type="button"
                        class="text-primary text-xs font-black uppercase tracking-[0.3em] hover:underline"
                        on:click=move |_| flip()
                    >
                        "Return"
                    </button>
                </div>
            }),
        ),
    };

    let on_card_click = move |_| {
        if variant == ExperienceVariant::Flip {
            flip();
        }
    };

    view! {
        <div
            node_ref=card_ref
            class=outer_class
            style="perspective: 2000px"
            data-flip-card="true"
            data-face=move || face.get().as_str()
            on:click=on_card_click
        >
            <div
                class="relative w-full transition-all duration-700 ease-[cubic-bezier(0.34,1.2,0.64,1)]"
                style=move || card_style(face.get())
            >
                <div
                    class="absolute -inset-px rounded-[2.5rem] opacity-0 group-hover:opacity-100 transition-opacity duration-500 z-10 pointer-events-none"
                    style=move || spotlight_style(element_x.get(), element_y.get())
                    data-spotlight="true"
                ></div>
                <div
                    class="absolute inset-0 w-full h-full glass rounded-[2.5rem] p-8 md:p-10 flex flex-col shadow-2xl border border-white/5"
                    style=move || face_style(CardFace::Front, face.get())
                    data-side="front"
                >
                    <div class="flex justify-between items-start mb-6">
                        <div class="flex items-center gap-2 text-muted-foreground text-sm">
                            <i class="extra-calendar text-primary"></i>
                            <span data-field="period">{period}</span>
                        </div>
                        {domain
                            .map(|d| {
                                view! {
                                    <span class="text-[10px] font-bold text-primary uppercase tracking-widest px-3 py-1 bg-primary/10 rounded-full border border-primary/20">
                                        {d}
                                    </span>
                                }
                            })}
                    </div>
                    <h3 class="text-3xl font-bold text-white mb-1 tracking-tight" data-field="role">
                        {role}
                    </h3>
                    <p class="text-primary font-semibold mb-6 text-lg" data-field="company">
                        {company}
                    </p>
                    <p class="text-muted-foreground text-sm leading-relaxed mb-8 border-l-2 border-primary/30 pl-4">
                        {description}
                    </p>
                    <div class="flex flex-wrap gap-2 mb-8">
                        {skills
                            .into_iter()
                            .map(|s| {
                                view! {
                                    <span class="px-3 py-1.5 bg-white/5 text-muted-foreground text-[10px] rounded-lg border border-white/10 uppercase tracking-widest font-bold">
                                        {s}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                    {front_footer}
                </div>
                <div
                    class="absolute inset-0 w-full h-full glass rounded-[2.5rem] p-8 md:p-10 border border-primary/40 bg-black/95 shadow-2xl flex flex-col"
                    style=move || face_style(CardFace::Back, face.get())
                    data-side="back"
                >
                    <div class="mb-6">
                        <div class="flex justify-between items-center mb-1">
                            <h3 class="text-xl font-bold text-[#2997ff] tracking-tight uppercase">
                                "Responsibilities"
                            </h3>
                            <i class="extra-check-circle text-primary"></i>
                        </div>
                        <p class="text-sm text-[#86868b]">"Impact & Business Outcomes"</p>
                        <div class="mt-6 h-[1px] w-full bg-gradient-to-r from-primary/60 via-primary/10 to-transparent"></div>
                    </div>
                    <div class="overflow-y-auto flex-grow custom-scrollbar pr-4">
                        <ul class="space-y-5">
                            {responsibilities
                                .into_iter()
                                .enumerate()
                                .map(|(i, item)| {
                                    let delay = stagger_delay_ms(i, 300, 80);
                                    view! {
                                        <li
                                            class=move || {
                                                if face.get().is_back() {
                                                    "text-sm text-muted-foreground flex gap-4 leading-relaxed group/item transition-all duration-500 opacity-100 translate-x-0"
                                                } else {
                                                    "text-sm text-muted-foreground flex gap-4 leading-relaxed group/item transition-all duration-500 opacity-0 -translate-x-5"
                                                }
                                            }
                                            style=format!("transition-delay: {delay}ms")
                                            data-responsibility=i.to_string()
                                        >
                                            <span class="mt-1.5 h-1.5 w-1.5 rounded-full bg-primary shrink-0"></span>
                                            <span class="group-hover/item:text-white transition-colors">
                                                {highlighted(&item, &highlighter, face)}
                                            </span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    {back_footer}
                </div>
            </div>
        </div>
    }
}

/// Responsibility text with tool keywords emphasised; keywords glow while the back is showing.
fn highlighted(
    text: &str,
    highlighter: &KeywordHighlighter,
    face: ReadSignal<CardFace>,
) -> impl IntoView {
    highlighter
        .segments(text)
        .into_iter()
        .map(|segment| match segment {
            Segment::Plain(s) => Either::Left(s.to_string()),
            Segment::Keyword(s) => Either::Right(view! {
                <span class=move || {
                    if face.get().is_back() {
                        "font-bold keyword-glow transition-colors duration-500"
                    } else {
                        "font-bold transition-colors duration-500"
                    }
                }>{s.to_string()}</span>
            }),
        })
        .collect_view()
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::motion::ScrollRatio;

    fn record(role: &str, company: &str, period: &str, bullets: &[&str]) -> ExperienceRecord {
        ExperienceRecord {
            role: role.to_string(),
            company: company.to_string(),
            period: period.to_string(),
            domain: None,
            description: format!("Worked as {role}"),
            skills: vec!["Python".to_string()],
            responsibilities: bullets.iter().map(|b| b.to_string()).collect(),
        }
    }

    fn records() -> Vec<ExperienceRecord> {
        vec![
            record(
                "Data Engineer",
                "Northwind",
                "Aug 2023 - Present",
                &["Built streaming pipelines", "Cut warehouse spend", "Ran the on call rota"],
            ),
            record(
                "Data Analyst",
                "Contoso",
                "June 2019 - July 2021",
                &["Modelled payments data", "Automated weekly exports"],
            ),
            record("Intern", "Fabrikam", "Summer 2018", &["Cleaned survey data"]),
        ]
    }

    fn render(records: Vec<ExperienceRecord>, variant: ExperienceVariant) -> String {
        Owner::new().with(|| view! { <ExperienceCards records=records variant=variant /> }.to_html())
    }

    #[test]
    fn test_one_card_per_record() {
        let html = render(records(), ExperienceVariant::Flip);
        assert_eq!(html.matches("data-flip-card").count(), 3);
        assert_eq!(html.matches(r#"data-face="front""#).count(), 3);

        let html = render(Vec::new(), ExperienceVariant::Flip);
        assert_eq!(html.matches("data-flip-card").count(), 0);
    }

    #[test]
    fn test_cards_show_their_own_record() {
        let records = records();
        let html = render(records.clone(), ExperienceVariant::Flip);
        let cards = html.split("data-flip-card").skip(1).collect::<Vec<_>>();
        assert_eq!(cards.len(), records.len());

        for (card, rec) in cards.iter().zip(&records) {
            let back = card.find(r#"data-side="back""#).expect("card should have a back face");
            let (front, back) = card.split_at(back);
            assert!(front.contains(&rec.role));
            assert!(front.contains(&rec.company));
            assert!(front.contains(&rec.period));

            let mut cursor = 0;
            for bullet in &rec.responsibilities {
                let pos = back[cursor..]
                    .find(bullet.as_str())
                    .unwrap_or_else(|| panic!("missing or out of order: {bullet}"));
                cursor += pos + bullet.len();
            }
            for other in records.iter().filter(|r| r.company != rec.company) {
                assert!(!card.contains(&other.company));
                assert!(!card.contains(&other.responsibilities[0]));
            }
        }
    }

    #[test]
    fn test_disclosure_variant_renders_controls() {
        let html = render(records(), ExperienceVariant::Disclosure);
        assert_eq!(html.matches("View details").count(), 3);
        assert_eq!(html.matches(">Return<").count(), 3);
        assert!(!html.contains("Click to View Impact"));

        let html = render(records(), ExperienceVariant::Flip);
        assert!(!html.contains("View details"));
    }

    #[test]
    fn test_keywords_rendered_as_spans() {
        let highlighter = KeywordHighlighter::new(&["pipelines"]).unwrap();
        let html = Owner::new().with(|| {
            view! {
                <ExperienceCards
                    records=records()
                    variant=ExperienceVariant::Flip
                    highlighter=highlighter
                />
            }
            .to_html()
        });
        assert!(html.contains(">pipelines</span>"));
        assert_eq!(html.matches(">pipelines<").count(), 1);
    }

    #[test]
    fn test_timeline_parts_share_easing() {
        let html = Owner::new().with(|| {
            let timeline = Memo::new(|_| TimelineProjection::from_ratio(ScrollRatio::new(0.4)));
            view! { <Timeline timeline=timeline /> }.to_html()
        });
        assert!(html.contains("height: 40.000%"));
        assert!(html.contains("top: 40.000%"));
        assert_eq!(html.matches(TIMELINE_EASING).count(), 2);
    }

    #[test]
    fn test_spotlight_follows_pointer() {
        assert_eq!(
            spotlight_style(120.4, 36.6),
            "background: radial-gradient(600px circle at 120px 37px, rgba(41, 151, 255, 0.1), transparent 80%)"
        );
        assert!(spotlight_style(f64::NAN, 10.0).contains("at 0px 0px"));

        let html = render(records(), ExperienceVariant::Flip);
        assert_eq!(html.matches(r#"data-spotlight="true""#).count(), 3);
        assert!(html.contains("group-hover:opacity-100"));
    }

    #[test]
    fn test_card_geometry() {
        assert_eq!(card_height_px(CardFace::Front), 480);
        assert_eq!(card_height_px(CardFace::Back), 720);
        assert!(card_style(CardFace::Back).starts_with("transform: rotateY(180deg)"));
        assert!(face_style(CardFace::Front, CardFace::Front).ends_with("z-index: 1"));
        assert!(face_style(CardFace::Back, CardFace::Front).ends_with("z-index: 0"));
    }
}
