use gloo_timers::callback::{Interval, Timeout};
use js_sys::{Array, Function, Reflect};
use std::{cell::RefCell, f64::consts::TAU, rc::Rc};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, HtmlElement,
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior,
    ScrollToOptions, SubmitEvent, Window,
};
use yew::prelude::*;

use crate::{
    content::{opens_in_new_tab, Accent, Highlight, ProjectEntry, SiteContent, SkillEntry, SocialLink, Timings},
    cycler::{CyclerTimings, TextCycler},
    particles::{fit_field, ParticleField},
    progress::{crosses_threshold, Percentage, ProgressFill, VisibilityLatch, VISIBILITY_THRESHOLD},
    sections::{section_at, Section, SectionBounds, SectionLayout},
    theme::{ParticleColors, Theme},
    view_state::{ViewAction, ViewState, SCROLL_COOLDOWN_MS},
};

const FRAME_INTERVAL_MS: u32 = 33;
const FALLBACK_VIEWPORT: (f64, f64) = (1280.0, 720.0);

impl Reducible for ViewState {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        self.reduce_shared(action)
    }
}

fn document() -> Option<Document> {
    window()?.document()
}

fn apply_theme(theme: Theme) {
    if let Some(root) = document().and_then(|d| d.document_element()) {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn apply_theme_with_transition(theme: Theme) {
    if prefers_reduced_motion() {
        apply_theme(theme);
        return;
    }

    let Some(document) = document() else {
        apply_theme(theme);
        return;
    };

    let document_js: JsValue = document.into();
    let Ok(start_view_transition) =
        Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
    else {
        apply_theme(theme);
        return;
    };

    let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
        apply_theme(theme);
        return;
    };

    let callback = Closure::once_into_js(move || apply_theme(theme));

    if start_view_transition.call1(&document_js, &callback).is_err()
    {
        apply_theme(theme);
    }
}

fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return FALLBACK_VIEWPORT;
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(FALLBACK_VIEWPORT.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(FALLBACK_VIEWPORT.1);

    (width, height)
}

/// Section geometry read straight from the live DOM.
struct DocumentLayout {
    document: Document,
}

impl SectionLayout for DocumentLayout {
    fn bounds(&self, section: Section) -> Option<SectionBounds> {
        let element = self
            .document
            .get_element_by_id(section.id())?
            .dyn_into::<HtmlElement>()
            .ok()?;

        Some(SectionBounds {
            top: f64::from(element.offset_top()),
            height: f64::from(element.offset_height()),
        })
    }
}

fn section_in_view() -> Option<Section> {
    let win = window()?;
    let scroll_y = win.scroll_y().ok()?;
    let layout = DocumentLayout {
        document: win.document()?,
    };
    section_at(scroll_y, &layout)
}

fn smooth_scroll_to(section: Section) {
    let Some(win) = window() else {
        return;
    };
    let Some(element) = win
        .document()
        .and_then(|d| d.get_element_by_id(section.id()))
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
    else {
        log::warn!("no element for section `{}`", section.id());
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(f64::from(element.offset_top()));
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}

/// A window event listener that detaches itself when dropped.
struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    fn attach(event: &'static str, callback: impl FnMut() + 'static) -> Option<Self> {
        let window = window()?;
        let callback = Closure::<dyn FnMut()>::new(callback);

        if let Err(error) =
            window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        {
            log::warn!("failed to listen for `{event}`: {error:?}");
            return None;
        }

        Some(Self {
            window,
            event,
            callback,
        })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Intersection observer that reports the first visible observation only and
/// disconnects when dropped.
struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl VisibilityObserver {
    fn observe_once(element: &Element, threshold: f64, mut on_visible: impl FnMut() + 'static) -> Option<Self> {
        let mut latch = VisibilityLatch::default();
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                let visible = entries.iter().any(|entry| {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    crosses_threshold(entry.is_intersecting(), entry.intersection_ratio(), threshold)
                });

                if latch.observe(visible) {
                    observer.disconnect();
                    on_visible();
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));

        let observer = match IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(observer) => observer,
            Err(error) => {
                log::warn!("intersection observer unavailable: {error:?}");
                return None;
            }
        };
        observer.observe(element);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// `true` from the first time the referenced element is at least `threshold` visible.
#[hook]
fn use_in_view(node: NodeRef, threshold: f64) -> bool {
    let in_view = use_state(|| false);

    {
        let in_view = in_view.clone();
        use_effect_with(node, move |node| {
            let observer = node.cast::<Element>().and_then(|element| {
                VisibilityObserver::observe_once(&element, threshold, move || in_view.set(true))
            });
            move || drop(observer)
        });
    }

    *in_view
}

#[derive(Properties, PartialEq)]
struct TypewriterProps {
    phrases: Vec<String>,
    #[prop_or_default]
    timings: CyclerTimings,
}

#[function_component(Typewriter)]
fn typewriter(props: &TypewriterProps) -> Html {
    let cycler = use_state(|| match TextCycler::new(props.phrases.clone(), props.timings) {
        Ok(cycler) => Some(cycler),
        Err(error) => {
            log::error!("hero typewriter disabled: {error}");
            None
        }
    });

    {
        let handle = cycler.clone();
        use_effect_with((*cycler).clone(), move |current| {
            let pending = current.clone().map(|mut next| {
                Timeout::new(next.next_delay_ms(), move || {
                    next.advance();
                    handle.set(Some(next));
                })
            });
            move || drop(pending)
        });
    }

    let Some(current) = cycler.as_ref() else {
        return Html::default();
    };

    html! {
        <div class="typewriter">
            <span class="gradient-text">{current.display().to_string()}</span>
            <span class="caret" aria-hidden="true">{"|"}</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SkillBarProps {
    name: AttrValue,
    percentage: Percentage,
    #[prop_or_default]
    delay_ms: u32,
    accent: Accent,
}

#[function_component(SkillBar)]
fn skill_bar(props: &SkillBarProps) -> Html {
    let node = use_node_ref();
    let fill = use_state(|| ProgressFill::new(props.percentage, props.delay_ms));
    let in_view = use_in_view(node.clone(), VISIBILITY_THRESHOLD);

    {
        let fill = fill.clone();
        use_effect_with(in_view, move |in_view| {
            let mut next = *fill;
            let pending = next.observe(*in_view).map(|delay_ms| {
                fill.set(next);
                let fill = fill.clone();
                let mut scheduled = next;
                Timeout::new(delay_ms, move || {
                    scheduled.complete();
                    fill.set(scheduled);
                })
            });
            move || drop(pending)
        });
    }

    let displayed = fill.displayed();

    html! {
        <div ref={node} class="skill-bar">
            <div class="skill-bar-header">
                <span class="skill-name">{props.name.clone()}</span>
                <span class="skill-value">{displayed.to_string()}</span>
            </div>
            <div class="skill-track">
                <div
                    class={classes!("skill-fill", format!("fill-{}", props.accent.as_str()))}
                    style={displayed.as_css_width()}
                ></div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ParticleBackgroundProps {
    theme: Theme,
}

fn seed_from_clock() -> u64 {
    let now = js_sys::Date::now() as u64;
    let jitter = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    now ^ (jitter << 20)
}

fn draw_field(context: &CanvasRenderingContext2d, field: &ParticleField, colors: ParticleColors) {
    let (width, height) = field.size();
    context.clear_rect(0.0, 0.0, width, height);

    let (r, g, b) = colors.link_rgb;
    context.set_line_width(0.6);
    for link in field.links() {
        context.set_stroke_style_str(&format!("rgba({r}, {g}, {b}, {:.3})", link.strength * 0.35));
        context.begin_path();
        context.move_to(link.from.0, link.from.1);
        context.line_to(link.to.0, link.to.1);
        context.stroke();
    }

    context.set_fill_style_str(colors.dot);
    for particle in field.particles() {
        context.begin_path();
        if context
            .arc(particle.x, particle.y, particle.radius, 0.0, TAU)
            .is_ok()
        {
            context.fill();
        }
    }
}

/// Canvas resources for the background; dropping it stops drawing and
/// detaches the resize listener.
struct ParticleAnimation {
    _resize: Option<WindowListener>,
    _frames: Option<Interval>,
}

fn fit_canvas(canvas: &HtmlCanvasElement, field: &mut Option<ParticleField>) {
    let (width, height) = viewport_size();
    if fit_field(field, width, height, seed_from_clock) {
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
    }
}

fn start_particles(
    canvas: HtmlCanvasElement,
    field: Rc<RefCell<Option<ParticleField>>>,
    colors: ParticleColors,
) -> Option<ParticleAnimation> {
    let context = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|context| context.dyn_into::<CanvasRenderingContext2d>().ok());
    let Some(context) = context else {
        log::warn!("2d canvas context unavailable, background disabled");
        return None;
    };

    let redraw_fitted = {
        let canvas = canvas.clone();
        let context = context.clone();
        let field = field.clone();
        move || {
            let mut field = field.borrow_mut();
            fit_canvas(&canvas, &mut *field);
            if let Some(field) = field.as_ref() {
                draw_field(&context, field, colors);
            }
        }
    };

    redraw_fitted();
    let resize = WindowListener::attach("resize", redraw_fitted);

    let frames = (!prefers_reduced_motion()).then(|| {
        Interval::new(FRAME_INTERVAL_MS, move || {
            if let Some(field) = field.borrow_mut().as_mut() {
                field.step();
                draw_field(&context, field, colors);
            }
        })
    });

    Some(ParticleAnimation {
        _resize: resize,
        _frames: frames,
    })
}

#[function_component(ParticleBackground)]
fn particle_background(props: &ParticleBackgroundProps) -> Html {
    let canvas_ref = use_node_ref();
    let field = use_mut_ref(|| None::<ParticleField>);

    use_effect_with((canvas_ref.clone(), props.theme), move |(canvas_ref, theme)| {
        let animation = canvas_ref
            .cast::<HtmlCanvasElement>()
            .and_then(|canvas| start_particles(canvas, field, theme.particle_colors()));
        move || drop(animation)
    });

    html! {
        <canvas ref={canvas_ref} class="particle-background" aria-hidden="true"></canvas>
    }
}

#[derive(Properties, PartialEq)]
struct ExternalLinkProps {
    href: AttrValue,
    #[prop_or_default]
    class: Classes,
    #[prop_or_default]
    aria_label: Option<AttrValue>,
    children: Html,
}

#[function_component(ExternalLink)]
fn external_link(props: &ExternalLinkProps) -> Html {
    let new_tab = opens_in_new_tab(&props.href);

    html! {
        <a
            class={props.class.clone()}
            href={props.href.clone()}
            target={new_tab.then(|| AttrValue::from("_blank"))}
            rel={new_tab.then(|| AttrValue::from("noopener noreferrer"))}
            aria-label={props.aria_label.clone()}
        >
            {props.children.clone()}
            if new_tab {
                <span class="sr-only">{" (opens in a new tab)"}</span>
            }
        </a>
    }
}

#[derive(Properties, PartialEq)]
struct NavProps {
    name: AttrValue,
    view: ViewState,
    on_navigate: Callback<Section>,
    on_toggle_theme: Callback<MouseEvent>,
}

#[function_component(Nav)]
fn nav(props: &NavProps) -> Html {
    let palette = props.view.theme.palette();
    let theme = props.view.theme;

    html! {
        <nav class={palette.nav}>
            <div class="container nav-row">
                <div class={palette.brand}>{props.name.clone()}</div>
                <div class="nav-actions">
                    <button
                        class={palette.toggle}
                        type="button"
                        aria-label={theme.toggle_label()}
                        aria-pressed={theme.pressed().to_string()}
                        onclick={props.on_toggle_theme.clone()}
                    >
                        <span aria-hidden="true">{theme.icon()}</span>
                    </button>
                    <div class="nav-links">
                        { for Section::ALL.into_iter().map(|section| {
                            let active = props.view.active_section == section;
                            let on_navigate = props.on_navigate.clone();
                            html! {
                                <button
                                    type="button"
                                    class={if active { palette.nav_active } else { palette.nav_idle }}
                                    aria-current={active.then(|| AttrValue::from("true"))}
                                    onclick={Callback::from(move |_| on_navigate.emit(section))}
                                >
                                    {section.label()}
                                </button>
                            }
                        }) }
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
struct HeroProps {
    content: Rc<SiteContent>,
    theme: Theme,
    on_navigate: Callback<Section>,
}

#[function_component(Hero)]
fn hero(props: &HeroProps) -> Html {
    let profile = &props.content.profile;
    let palette = props.theme.palette();
    let on_scroll_down = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(Section::About))
    };

    html! {
        <section id={Section::Home.id()} class="hero">
            <div class="container hero-row">
                <div class="hero-copy">
                    <h1 class="hero-title">
                        <span class="hero-greeting">{"Hi, I'm"}</span>
                        <span class="gradient-text">{profile.name.clone()}</span>
                    </h1>
                    <div class="hero-typewriter">
                        <Typewriter
                            phrases={profile.phrases.clone()}
                            timings={props.content.timings.cycler()}
                        />
                    </div>
                    <div class="hero-social">
                        { for props.content.social.iter().map(|link| html! {
                            <ExternalLink
                                href={link.href.clone()}
                                class={classes!(palette.icon_button)}
                                aria_label={Some(AttrValue::from(link.label.clone()))}
                            >
                                <span aria-hidden="true">{link.kind.icon()}</span>
                            </ExternalLink>
                        }) }
                    </div>
                    <button
                        type="button"
                        class="scroll-hint"
                        aria-label="Scroll to about"
                        onclick={on_scroll_down}
                    >
                        <span aria-hidden="true">{"⌄"}</span>
                    </button>
                </div>
                <div class="hero-portrait">
                    <div class="portrait-frame">
                        <img src={profile.avatar_url.clone()} alt={profile.name.clone()} />
                    </div>
                    <div class="portrait-halo" aria-hidden="true"></div>
                </div>
            </div>
        </section>
    }
}

fn section_heading(title: &'static str) -> Html {
    html! {
        <h2 class="section-heading">
            <span class="gradient-text">{title}</span>
        </h2>
    }
}

fn highlight_card(highlight: &Highlight) -> Html {
    html! {
        <div class={classes!("highlight-card", format!("hover-{}", highlight.accent.as_str()))}>
            <h3 class={format!("accent-{}", highlight.accent.as_str())}>{highlight.title.clone()}</h3>
            { for highlight.lines.iter().map(|line| html! { <p>{line.clone()}</p> }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ContentProps {
    content: Rc<SiteContent>,
    theme: Theme,
}

#[function_component(About)]
fn about(props: &ContentProps) -> Html {
    let profile = &props.content.profile;

    html! {
        <section id={Section::About.id()} class="section">
            <div class="container">
                {section_heading("About Me")}
                <div class="glass-card">
                    <p class="about-text">{profile.about.clone()}</p>
                    <div class="highlight-grid">
                        { for profile.highlights.iter().map(highlight_card) }
                    </div>
                </div>
            </div>
        </section>
    }
}

fn skill_rows(skills: &[SkillEntry], accent: Accent, timings: &Timings) -> Html {
    skills
        .iter()
        .enumerate()
        .map(|(index, skill)| {
            html! {
                <SkillBar
                    key={skill.name.clone()}
                    name={skill.name.clone()}
                    percentage={skill.percentage()}
                    delay_ms={timings.stagger_ms(index)}
                    accent={accent}
                />
            }
        })
        .collect()
}

#[function_component(Skills)]
fn skills(props: &ContentProps) -> Html {
    let timings = props.content.timings;

    html! {
        <section id={Section::Skills.id()} class="section section-shaded">
            <div class="container">
                {section_heading("My Skills")}
                <div class="skill-grid">
                    { for props.content.skill_groups.iter().map(|group| html! {
                        <div class={classes!("glass-card", format!("hover-{}", group.accent.as_str()))}>
                            <h3 class={classes!("group-title", format!("accent-{}", group.accent.as_str()))}>
                                {group.title.clone()}
                            </h3>
                            <div class="skill-list">
                                {skill_rows(&group.skills, group.accent, &timings)}
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: ProjectEntry,
    #[prop_or_default]
    delay_ms: u32,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let node = use_node_ref();
    let revealed = use_in_view(node.clone(), VISIBILITY_THRESHOLD);
    let project = &props.project;
    let style = format!("transition-delay: {:.1}s;", f64::from(props.delay_ms) / 1_000.0);

    html! {
        <article
            ref={node}
            class={classes!("project-card", revealed.then_some("is-revealed"))}
            style={style}
        >
            <div class="project-media">
                <img src={project.image_url.clone()} alt={project.title.clone()} loading="lazy" />
                <div class="project-tags">
                    { for project.technologies.iter().map(|tech| html! {
                        <span class="tag">{tech.clone()}</span>
                    }) }
                </div>
            </div>
            <div class="project-body">
                <h3>{project.title.clone()}</h3>
                <p class="text-soft">{project.description.clone()}</p>
                <div class="project-links">
                    <ExternalLink href={project.repository_url.clone()} class={classes!("project-link")}>
                        {"GitHub"}
                    </ExternalLink>
                    if let Some(live_url) = project.live_url.clone() {
                        <ExternalLink href={live_url} class={classes!("project-link")}>
                            {"Live Demo"}
                        </ExternalLink>
                    }
                </div>
            </div>
        </article>
    }
}

#[function_component(Projects)]
fn projects(props: &ContentProps) -> Html {
    let timings = props.content.timings;

    html! {
        <section id={Section::Projects.id()} class="section">
            <div class="container">
                {section_heading("My Projects")}
                <div class="project-grid">
                    { for props.content.projects.iter().enumerate().map(|(index, project)| html! {
                        <ProjectCard
                            key={project.title.clone()}
                            project={project.clone()}
                            delay_ms={timings.stagger_ms(index)}
                        />
                    }) }
                </div>
            </div>
        </section>
    }
}

fn labelled_social_link(link: &SocialLink) -> Html {
    html! {
        <ExternalLink href={link.href.clone()} class={classes!("contact-link")}>
            <span aria-hidden="true">{link.kind.icon()}</span>
            <span>{link.label.clone()}</span>
        </ExternalLink>
    }
}

#[function_component(Contact)]
fn contact(props: &ContentProps) -> Html {
    let onsubmit = Callback::from(|event: SubmitEvent| {
        event.prevent_default();
        log::debug!("contact form has no submission endpoint");
    });

    html! {
        <section id={Section::Contact.id()} class="section">
            <div class="container narrow">
                {section_heading("Get In Touch")}
                <div class="glass-card">
                    <form class="contact-form" onsubmit={onsubmit}>
                        <label for="name">{"Name"}</label>
                        <input type="text" id="name" placeholder="Your name" />
                        <label for="email">{"Email"}</label>
                        <input type="email" id="email" placeholder="your@email.com" />
                        <label for="message">{"Message"}</label>
                        <textarea id="message" rows="4" placeholder="Your message"></textarea>
                        <button type="submit" class="submit-button">{"Send Message"}</button>
                    </form>
                    <div class="contact-links">
                        { for props.content.social.iter().map(labelled_social_link) }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer(props: &ContentProps) -> Html {
    let palette = props.theme.palette();

    html! {
        <footer class="site-footer">
            <div class="container footer-row">
                <p class={palette.muted}>{props.content.profile.copyright.clone()}</p>
                <div class="footer-social">
                    { for props.content.social.iter().filter(|link| link.opens_new_tab()).map(|link| html! {
                        <ExternalLink
                            href={link.href.clone()}
                            class={classes!(palette.icon_button)}
                            aria_label={Some(AttrValue::from(link.label.clone()))}
                        >
                            <span aria-hidden="true">{link.kind.icon()}</span>
                        </ExternalLink>
                    }) }
                </div>
            </div>
        </footer>
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    content: Rc<SiteContent>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let view = use_reducer_eq(ViewState::default);
    let scroll_cooldown = use_mut_ref(|| None::<Timeout>);

    {
        let current = view.theme;
        use_effect_with((), move |_| {
            apply_theme(current);
            || ()
        });
    }

    {
        let dispatcher = view.dispatcher();
        use_effect_with((), move |_| {
            let track = move || dispatcher.dispatch(ViewAction::Scrolled(section_in_view()));
            track();
            let listener = WindowListener::attach("scroll", track);
            move || drop(listener)
        });
    }

    let on_toggle_theme = {
        let view = view.clone();
        Callback::from(move |_| {
            let next = view.theme.toggled();
            apply_theme_with_transition(next);
            view.dispatch(ViewAction::ToggleTheme);
        })
    };

    let on_navigate = {
        let view = view.clone();
        Callback::from(move |section: Section| {
            view.dispatch(ViewAction::ProgrammaticScrollStarted);
            smooth_scroll_to(section);

            let dispatcher = view.dispatcher();
            let cooldown = Timeout::new(SCROLL_COOLDOWN_MS, move || {
                dispatcher.dispatch(ViewAction::ProgrammaticScrollEnded)
            });
            // replacing the handle cancels an earlier cooldown
            *scroll_cooldown.borrow_mut() = Some(cooldown);
        })
    };

    let content = props.content.clone();
    let theme = view.theme;

    html! {
        <div class={theme.palette().page}>
            <ParticleBackground theme={theme} />
            <Nav
                name={content.profile.name.clone()}
                view={*view}
                on_navigate={on_navigate.clone()}
                on_toggle_theme={on_toggle_theme}
            />
            <main>
                <Hero content={content.clone()} theme={theme} on_navigate={on_navigate} />
                <About content={content.clone()} theme={theme} />
                <Skills content={content.clone()} theme={theme} />
                <Projects content={content.clone()} theme={theme} />
                <Contact content={content.clone()} theme={theme} />
            </main>
            <Footer content={content} theme={theme} />
        </div>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();
    if let Err(error) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console logging unavailable: {error}").into());
    }

    let content = match SiteContent::embedded() {
        Ok(content) => Rc::new(content),
        Err(error) => {
            log::error!("site content rejected, nothing mounted: {error}");
            return;
        }
    };

    yew::Renderer::<App>::with_root_and_props(
        document()
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
        AppProps { content },
    )
    .render();
}
