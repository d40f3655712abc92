//! About section with count-up stats and skill bars.

use gallery::consts::FRAME_MS;
use gallery::motion::CountUp;
use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::util::timers;

/// `(target, label)`
const STATS: [(u32, &str); 3] = [(150, "Projects delivered"), (80, "Happy clients"), (5, "Years in design")];

/// `(skill, percent)`
const SKILLS: [(&str, u8); 5] = [
    ("Marketplace infographics", 95),
    ("Reels & Shorts editing", 90),
    ("YouTube editing", 85),
    ("Web development", 80),
    ("Motion design", 75),
];

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="about">
            <div class="container">
                <Reveal class="section-header">
                    <h2 class="section-title">"About"</h2>
                    <p class="section-subtitle">
                        "I design product cards that convert, cut videos people watch to the end, and build the sites around them."
                    </p>
                </Reveal>
                <div class="stats">
                    {STATS.iter().map(|&(target, label)| view! { <StatCounter target label/> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Number that counts up from zero once scrolled into view.
#[component]
fn StatCounter(target: u32, label: &'static str) -> impl IntoView {
    let text = RwSignal::new("0".to_owned());
    let frames = StoredValue::new(None::<timers::LoopHandle>);

    let start = Callback::new(move |()| {
        if frames.with_value(Option::is_some) {
            return;
        }
        let mut counter = CountUp::new(target);
        text.set(counter.label());
        let handle = timers::every(FRAME_MS, move || {
            let running = counter.tick();
            text.set(counter.label());
            running
        });
        frames.set_value(Some(handle));
    });
    on_cleanup(move || {
        if let Some(handle) = frames.try_get_value().flatten() {
            handle.stop();
        }
    });

    view! {
        <Reveal class="stat" on_reveal=start>
            <span class="stat-number">{move || text.get()}</span>
            <span class="stat-label">{label}</span>
        </Reveal>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="skills">
            <div class="container">
                <Reveal class="section-header">
                    <h2 class="section-title">"Skills"</h2>
                </Reveal>
                <div class="skills-list">
                    {SKILLS.iter().map(|&(name, percent)| view! { <SkillBar name percent/> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Progress bar that fills to its percentage when revealed.
#[component]
fn SkillBar(name: &'static str, percent: u8) -> impl IntoView {
    let filled = RwSignal::new(false);
    let percent = percent.min(100);
    view! {
        <Reveal class="skill" on_reveal=Callback::new(move |()| filled.set(true))>
            <div class="skill-header">
                <span class="skill-name">{name}</span>
                <span class="skill-percent">{format!("{percent}%")}</span>
            </div>
            <div class="skill-bar">
                <div class="skill-progress" style:width=move || if filled.get() { format!("{percent}%") } else { "0%".to_owned() }></div>
            </div>
        </Reveal>
    }
}
