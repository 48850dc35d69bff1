use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use gloo_timers::future::sleep;
use js_sys::{Array, Date, Function, Reflect, JSON};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    window, Document, Element, HtmlElement, HtmlImageElement, HtmlInputElement, HtmlLinkElement,
    HtmlTextAreaElement, InputEvent, IntersectionObserver, IntersectionObserverEntry, MouseEvent,
    ScrollBehavior, ScrollToOptions, Storage, SubmitEvent,
};
use yew::prelude::*;

use crate::contact::{ContactMessage, ContactResponse, SubmitError, SubmitState, CONTACT_ENDPOINT, STATUS_DISMISS_MS};
use crate::rate_limit::{Debounce, Throttle};
use crate::theme::{PreferenceStore, StoreError, Theme, ThemeManager};
use crate::typing::TypingAnimation;

const NAV_SCROLL_OFFSET_PX: f64 = 80.0;
const NAVBAR_SCROLLED_AT_PX: f64 = 50.0;
const ACTIVE_SECTION_PROBE_PX: f64 = 100.0;
const SCROLL_THROTTLE_MS: f64 = 100.0;
const RESIZE_DEBOUNCE_MS: u32 = 250;
const PARALLAX_RATE: f64 = -0.5;
const THEME_TRANSITION_MS: u32 = 300;
const PAGE_TRANSITION_MS: u32 = 300;
const OVERLAY_HIDE_DELAY_MS: u32 = 100;
const LOADER_FADE_MS: u32 = 300;

const TYPING_WORDS: [&str; 4] = [
    "Software Engineer",
    "Full Stack Developer",
    "Problem Solver",
    "Open Source Contributor",
];

const NAV_LINKS: [(&str, &str); 5] = [
    ("home", "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

const INTERACTIVE_SELECTOR: &str = "a, button, .btn, .project-item, .skill-category";

const CRITICAL_IMAGES: [&str; 2] = ["images/profile.jpg", "images/hero-bg.jpg"];

const PARTICLES_OPTIONS: &str = r#"{
  "particles": {
    "number": { "value": 80, "density": { "enable": true, "value_area": 800 } },
    "color": { "value": ["#00ff88", "#06b6d4", "#f59e0b"] },
    "shape": { "type": "circle" },
    "opacity": {
      "value": 0.6,
      "random": false,
      "anim": { "enable": true, "speed": 1, "opacity_min": 0.1, "sync": false }
    },
    "size": {
      "value": 3,
      "random": true,
      "anim": { "enable": true, "speed": 4, "size_min": 0.3, "sync": false }
    },
    "line_linked": { "enable": true, "distance": 150, "color": "#00ff88", "opacity": 0.4, "width": 1 },
    "move": {
      "enable": true,
      "speed": 2,
      "direction": "none",
      "random": false,
      "straight": false,
      "out_mode": "out",
      "bounce": false
    }
  },
  "interactivity": {
    "detect_on": "canvas",
    "events": {
      "onhover": { "enable": true, "mode": "repulse" },
      "onclick": { "enable": true, "mode": "push" },
      "resize": true
    },
    "modes": { "repulse": { "distance": 200, "duration": 0.4 }, "push": { "particles_nb": 4 } }
  },
  "retina_detect": true
}"#;

const SCROLL_REVEAL_OPTIONS: &str =
    r#"{ "duration": 1000, "easing": "ease-out-cubic", "once": true, "offset": 120, "delay": 100 }"#;

fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

struct BrowserPreferences;

impl PreferenceStore for BrowserPreferences {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = local_storage().ok_or(StoreError)?;
        storage.set_item(key, value).map_err(|_| StoreError)
    }
}

fn apply_theme(theme: Theme) {
    if let Some(document) = document() {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
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

fn animate_theme_change() {
    if prefers_reduced_motion() {
        return;
    }

    let Some(body) = document().and_then(|d| d.body()) else {
        return;
    };

    let style = body.style();
    let _ = style.set_property(
        "transition",
        "background-color 0.3s ease, color 0.3s ease",
    );
    Timeout::new(THEME_TRANSITION_MS, move || {
        let _ = style.remove_property("transition");
    })
    .forget();
}

fn set_body_scroll_locked(locked: bool) {
    let Some(body) = document().and_then(|d| d.body()) else {
        return;
    };

    let style = body.style();
    if locked {
        let _ = style.set_property("overflow", "hidden");
    } else {
        let _ = style.remove_property("overflow");
    }
}

fn scroll_to_section(id: &str) {
    let Some(document) = document() else {
        return;
    };
    let Some(target) = document.get_element_by_id(id) else {
        return;
    };
    let Ok(target) = target.dyn_into::<HtmlElement>() else {
        return;
    };
    let Some(win) = window() else {
        return;
    };

    let top = (f64::from(target.offset_top()) - NAV_SCROLL_OFFSET_PX).max(0.0);
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}

fn active_section_id(document: &Document, scroll_y: f64) -> Option<String> {
    let probe = scroll_y + ACTIVE_SECTION_PROBE_PX;
    let sections = document.query_selector_all("section[id]").ok()?;

    let mut active = None;
    for index in 0..sections.length() {
        let Some(node) = sections.item(index) else {
            continue;
        };
        let Ok(section) = node.dyn_into::<HtmlElement>() else {
            continue;
        };
        let top = f64::from(section.offset_top());
        let height = f64::from(section.offset_height());
        if probe >= top && probe < top + height {
            active = Some(section.id());
        }
    }

    active
}

fn global_function(target: &JsValue, name: &str) -> Option<Function> {
    let value = Reflect::get(target, &JsValue::from_str(name)).ok()?;
    value.dyn_into::<Function>().ok()
}

fn init_particles() {
    let Some(win) = window() else {
        return;
    };
    let win: JsValue = win.into();
    let Some(particles) = global_function(&win, "particlesJS") else {
        return;
    };
    let Ok(options) = JSON::parse(PARTICLES_OPTIONS) else {
        return;
    };
    let _ = particles.call2(&win, &JsValue::from_str("particles-js"), &options);
}

fn resize_particles() {
    // window.pJSDom[0].pJS.fn.vendors.resize() when the particles runtime is loaded
    let Some(win) = window() else {
        return;
    };
    let win: JsValue = win.into();
    let Ok(instances) = Reflect::get(&win, &JsValue::from_str("pJSDom")) else {
        return;
    };
    let Ok(first) = Reflect::get_u32(&instances, 0) else {
        return;
    };

    let mut vendors = first;
    for key in ["pJS", "fn", "vendors"] {
        let Ok(next) = Reflect::get(&vendors, &JsValue::from_str(key)) else {
            return;
        };
        vendors = next;
    }

    let Some(resize) = global_function(&vendors, "resize") else {
        return;
    };
    let _ = resize.call0(&vendors);
}

fn scroll_reveal_global() -> Option<JsValue> {
    let win: JsValue = window()?.into();
    let value = Reflect::get(&win, &JsValue::from_str("AOS")).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    Some(value)
}

fn init_scroll_reveal() {
    let Some(aos) = scroll_reveal_global() else {
        return;
    };
    let Some(init) = global_function(&aos, "init") else {
        return;
    };
    let Ok(options) = JSON::parse(SCROLL_REVEAL_OPTIONS) else {
        return;
    };
    let _ = init.call1(&aos, &options);
}

fn refresh_scroll_reveal() {
    let Some(aos) = scroll_reveal_global() else {
        return;
    };
    let Some(refresh) = global_function(&aos, "refresh") else {
        return;
    };
    let _ = refresh.call0(&aos);
}

fn init_lazy_images() {
    let Some(document) = document() else {
        return;
    };
    let Ok(images) = document.query_selector_all("img[data-src]") else {
        return;
    };
    if images.length() == 0 {
        return;
    }

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let Ok(image) = entry.target().dyn_into::<HtmlImageElement>() else {
                    continue;
                };
                if let Some(src) = image.dataset().get("src") {
                    image.set_src(&src);
                }
                let _ = image.class_list().remove_1("lazy");
                observer.unobserve(&image);
            }
        },
    );
    let Ok(observer) = IntersectionObserver::new(callback.as_ref().unchecked_ref()) else {
        return;
    };
    callback.forget();

    for index in 0..images.length() {
        let Some(node) = images.item(index) else {
            continue;
        };
        if let Ok(element) = node.dyn_into::<Element>() {
            observer.observe(&element);
        }
    }
}

fn preload_critical_images() {
    let Some(document) = document() else {
        return;
    };
    let Some(head) = document.head() else {
        return;
    };

    for src in CRITICAL_IMAGES {
        let Ok(link) = document.create_element("link") else {
            continue;
        };
        let Ok(link) = link.dyn_into::<HtmlLinkElement>() else {
            continue;
        };
        link.set_rel("preload");
        link.set_as("image");
        link.set_href(src);
        let _ = head.append_child(&link);
    }
}

fn reveal_page() {
    let Some(document) = document() else {
        return;
    };

    if let Some(body) = document.body() {
        let _ = body.class_list().add_1("loaded");
    }

    let Ok(Some(loader)) = document.query_selector(".loader") else {
        return;
    };
    let Ok(loader) = loader.dyn_into::<HtmlElement>() else {
        return;
    };
    let _ = loader.style().set_property("opacity", "0");
    Timeout::new(LOADER_FADE_MS, move || loader.remove()).forget();
}

fn wire_parallax() {
    let Some(win) = window() else {
        return;
    };
    let Some(document) = document() else {
        return;
    };
    let Ok(Some(hero)) = document.query_selector(".hero") else {
        return;
    };
    let Ok(hero) = hero.dyn_into::<HtmlElement>() else {
        return;
    };

    let on_scroll = Closure::<dyn FnMut()>::new(move || {
        let Some(win) = window() else {
            return;
        };
        let offset = win.page_y_offset().unwrap_or(0.0);
        let _ = hero
            .style()
            .set_property("transform", &format!("translateY({}px)", offset * PARALLAX_RATE));
    });
    let _ = win.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
    on_scroll.forget();
}

fn wire_resize_refresh() {
    let Some(win) = window() else {
        return;
    };

    let gate = Rc::new(RefCell::new(Debounce::new(f64::from(RESIZE_DEBOUNCE_MS))));
    let on_resize = Closure::<dyn FnMut()>::new(move || {
        gate.borrow_mut().record(Date::now());
        let gate = gate.clone();
        Timeout::new(RESIZE_DEBOUNCE_MS, move || {
            if gate.borrow_mut().fire_due(Date::now()) {
                resize_particles();
                refresh_scroll_reveal();
            }
        })
        .forget();
    });
    let _ = win.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    on_resize.forget();
}

async fn send_contact(message: ContactMessage) -> Result<(), SubmitError> {
    let request = Request::post(CONTACT_ENDPOINT)
        .json(&message)
        .map_err(|_| SubmitError::Rejected)?;
    let response = request.send().await.map_err(|_| SubmitError::Rejected)?;

    if !response.ok() {
        return Err(SubmitError::Status(response.status()));
    }

    let payload = response
        .json::<ContactResponse>()
        .await
        .map_err(|_| SubmitError::Rejected)?;
    if payload.ok {
        Ok(())
    } else {
        Err(SubmitError::Rejected)
    }
}

fn bind_input(handle: UseStateHandle<String>) -> Callback<InputEvent> {
    Callback::from(move |event: InputEvent| {
        let input: HtmlInputElement = event.target_unchecked_into();
        handle.set(input.value());
    })
}

fn bind_textarea(handle: UseStateHandle<String>) -> Callback<InputEvent> {
    Callback::from(move |event: InputEvent| {
        let area: HtmlTextAreaElement = event.target_unchecked_into();
        handle.set(area.value());
    })
}

#[derive(Properties, PartialEq)]
struct TypingTextProps {
    words: Vec<AttrValue>,
}

#[function_component(TypingText)]
fn typing_text(props: &TypingTextProps) -> Html {
    let rendered = use_state(String::new);

    {
        let rendered = rendered.clone();
        use_effect_with(props.words.clone(), move |words| {
            let alive = Rc::new(Cell::new(true));
            let halt = alive.clone();

            if let Some(mut animation) = TypingAnimation::new(words.iter().map(ToString::to_string)) {
                spawn_local(async move {
                    loop {
                        let frame = animation.tick();
                        if !alive.get() {
                            break;
                        }
                        rendered.set(frame.text);
                        sleep(Duration::from_millis(u64::from(frame.delay_ms))).await;
                        if !alive.get() {
                            break;
                        }
                    }
                });
            }

            move || halt.set(false)
        });
    }

    html! {
        <span class="typing-text">{(*rendered).clone()}</span>
    }
}

fn hovered_interactive(event: &MouseEvent) -> bool {
    let Some(target) = event.target() else {
        return false;
    };
    let Ok(element) = target.dyn_into::<Element>() else {
        return false;
    };
    element.closest(INTERACTIVE_SELECTOR).ok().flatten().is_some()
}

fn set_cursor_opacity(dot: &HtmlElement, outline: &HtmlElement, opacity: &str) {
    let _ = dot.style().set_property("opacity", opacity);
    let _ = outline.style().set_property("opacity", opacity);
}

fn wire_custom_cursor(dot_ref: &NodeRef, outline_ref: &NodeRef) {
    let Some(dot) = dot_ref.cast::<HtmlElement>() else {
        return;
    };
    let Some(outline) = outline_ref.cast::<HtmlElement>() else {
        return;
    };
    let Some(document) = document() else {
        return;
    };

    if let Some(body) = document.body() {
        let _ = body.style().set_property("cursor", "none");
    }

    let move_dot = dot.clone();
    let move_outline = outline.clone();
    let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        let x = format!("{}px", event.client_x());
        let y = format!("{}px", event.client_y());
        let _ = move_dot.style().set_property("left", &x);
        let _ = move_dot.style().set_property("top", &y);
        let _ = move_outline.style().set_property("left", &x);
        let _ = move_outline.style().set_property("top", &y);
    });
    let _ = document.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());
    on_move.forget();

    let enter_dot = dot.clone();
    let enter_outline = outline.clone();
    let on_enter = Closure::<dyn FnMut(MouseEvent)>::new(move |_: MouseEvent| {
        set_cursor_opacity(&enter_dot, &enter_outline, "1");
    });
    let _ = document.add_event_listener_with_callback("mouseenter", on_enter.as_ref().unchecked_ref());
    on_enter.forget();

    let leave_dot = dot.clone();
    let leave_outline = outline.clone();
    let on_leave = Closure::<dyn FnMut(MouseEvent)>::new(move |_: MouseEvent| {
        set_cursor_opacity(&leave_dot, &leave_outline, "0");
    });
    let _ = document.add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref());
    on_leave.forget();

    let over_outline = outline.clone();
    let on_over = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        if hovered_interactive(&event) {
            let _ = over_outline.class_list().add_1("hover");
        }
    });
    let _ = document.add_event_listener_with_callback("mouseover", on_over.as_ref().unchecked_ref());
    on_over.forget();

    let out_outline = outline;
    let on_out = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        if hovered_interactive(&event) {
            let _ = out_outline.class_list().remove_1("hover");
        }
    });
    let _ = document.add_event_listener_with_callback("mouseout", on_out.as_ref().unchecked_ref());
    on_out.forget();
}

#[function_component(CustomCursor)]
fn custom_cursor() -> Html {
    let dot_ref = use_node_ref();
    let outline_ref = use_node_ref();

    {
        let dot_ref = dot_ref.clone();
        let outline_ref = outline_ref.clone();
        use_effect_with((), move |_| {
            wire_custom_cursor(&dot_ref, &outline_ref);
            || ()
        });
    }

    html! {
        <>
            <div class="cursor-dot" data-cursor-dot="" ref={dot_ref} aria-hidden="true"></div>
            <div class="cursor-outline" data-cursor-outline="" ref={outline_ref} aria-hidden="true"></div>
        </>
    }
}

#[derive(Properties, PartialEq)]
struct NavbarProps {
    theme: Theme,
    on_toggle_theme: Callback<()>,
    on_navigate: Callback<String>,
}

#[function_component(Navbar)]
fn navbar(props: &NavbarProps) -> Html {
    let menu_open = use_state(|| false);
    let menu_is_open = use_mut_ref(|| false);
    let scrolled = use_state(|| false);
    let active_section = use_state(|| AttrValue::from("home"));

    let set_menu: Rc<dyn Fn(bool)> = {
        let menu_open = menu_open.clone();
        let menu_is_open = menu_is_open.clone();
        Rc::new(move |open: bool| {
            menu_open.set(open);
            *menu_is_open.borrow_mut() = open;
            set_body_scroll_locked(open);
        })
    };

    {
        let scrolled = scrolled.clone();
        let active_section = active_section.clone();
        use_effect_with((), move |_| {
            let gate = Rc::new(RefCell::new(Throttle::new(SCROLL_THROTTLE_MS)));
            let on_scroll = Closure::<dyn FnMut()>::new(move || {
                if !gate.borrow_mut().admit(Date::now()) {
                    return;
                }
                let Some(win) = window() else {
                    return;
                };
                let scroll_y = win.scroll_y().unwrap_or(0.0);
                scrolled.set(scroll_y > NAVBAR_SCROLLED_AT_PX);
                if let Some(document) = document() {
                    if let Some(id) = active_section_id(&document, scroll_y) {
                        active_section.set(AttrValue::from(id));
                    }
                }
            });
            if let Some(win) = window() {
                let _ = win.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
            }
            on_scroll.forget();
            || ()
        });
    }

    {
        let menu_is_open = menu_is_open.clone();
        let set_menu = set_menu.clone();
        use_effect_with((), move |_| {
            let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
                if !*menu_is_open.borrow() {
                    return;
                }
                let Some(target) = event.target() else {
                    return;
                };
                let Ok(element) = target.dyn_into::<Element>() else {
                    return;
                };
                if element.closest("#nav-menu").ok().flatten().is_none()
                    && element.closest("#hamburger").ok().flatten().is_none()
                {
                    set_menu(false);
                }
            });
            if let Some(document) = document() {
                let _ =
                    document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
            }
            on_click.forget();
            || ()
        });
    }

    let on_hamburger = {
        let menu_is_open = menu_is_open.clone();
        let set_menu = set_menu.clone();
        Callback::from(move |_: MouseEvent| {
            let open = !*menu_is_open.borrow();
            set_menu(open);
        })
    };

    let nav_link_click = |id: &'static str| {
        let set_menu = set_menu.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            set_menu(false);
            on_navigate.emit(id.to_string());
        })
    };

    let on_theme_toggle = {
        let on_toggle_theme = props.on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };

    html! {
        <nav class={classes!("navbar", (*scrolled).then_some("scrolled"))}>
            <div class="nav-container">
                <a class="nav-logo" href="#home" onclick={nav_link_click("home")}>{"<dev />"}</a>
                <ul id="nav-menu" class={classes!("nav-menu", (*menu_open).then_some("active"))}>
                    {
                        for NAV_LINKS.iter().map(|(id, label)| {
                            let active = active_section.as_str() == *id;
                            html! {
                                <li>
                                    <a
                                        class={classes!("nav-link", active.then_some("active"))}
                                        href={format!("#{id}")}
                                        onclick={nav_link_click(*id)}
                                    >
                                        {*label}
                                    </a>
                                </li>
                            }
                        })
                    }
                </ul>
                <button
                    id="theme-toggle"
                    class="theme-toggle"
                    type="button"
                    aria-label={props.theme.toggle_label()}
                    aria-pressed={props.theme.pressed().to_string()}
                    onclick={on_theme_toggle}
                >
                    <i
                        class="fa-solid fa-sun"
                        style={format!("opacity: {}", props.theme.sun_opacity())}
                        aria-hidden="true"
                    ></i>
                    <i
                        class="fa-solid fa-moon"
                        style={format!("opacity: {}", props.theme.moon_opacity())}
                        aria-hidden="true"
                    ></i>
                </button>
                <button
                    id="hamburger"
                    class={classes!("hamburger", (*menu_open).then_some("active"))}
                    type="button"
                    aria-label="Toggle navigation"
                    onclick={on_hamburger}
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </div>
        </nav>
    }
}

#[function_component(ContactForm)]
fn contact_form() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let subject = use_state(String::new);
    let body = use_state(String::new);

    let submit_ref = use_mut_ref(SubmitState::default);
    let submit_view = use_state(SubmitState::default);

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let subject = subject.clone();
        let body = body.clone();
        let submit_ref = submit_ref.clone();
        let submit_view = submit_view.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if !submit_ref.borrow_mut().begin() {
                return;
            }
            submit_view.set(submit_ref.borrow().clone());

            let message = ContactMessage {
                name: (*name).clone(),
                email: (*email).clone(),
                subject: (*subject).clone(),
                message: (*body).clone(),
            };

            let name = name.clone();
            let email = email.clone();
            let subject = subject.clone();
            let body = body.clone();
            let submit_ref = submit_ref.clone();
            let submit_view = submit_view.clone();
            spawn_local(async move {
                let outcome = send_contact(message).await;
                let succeeded = outcome.is_ok();
                let ticket = submit_ref.borrow_mut().settle(outcome);
                submit_view.set(submit_ref.borrow().clone());

                if succeeded {
                    name.set(String::new());
                    email.set(String::new());
                    subject.set(String::new());
                    body.set(String::new());
                }

                Timeout::new(STATUS_DISMISS_MS, move || {
                    submit_ref.borrow_mut().dismiss(ticket);
                    submit_view.set(submit_ref.borrow().clone());
                })
                .forget();
            });
        })
    };

    let sending = submit_view.is_sending();

    html! {
        <form id="contact-form" class="contact-form" onsubmit={onsubmit}>
            <div class="form-field">
                <label for="contact-name">{"Name"}</label>
                <input
                    id="contact-name"
                    name="name"
                    type="text"
                    required={true}
                    value={(*name).clone()}
                    oninput={bind_input(name.clone())}
                />
            </div>
            <div class="form-field">
                <label for="contact-email">{"Email"}</label>
                <input
                    id="contact-email"
                    name="email"
                    type="email"
                    required={true}
                    value={(*email).clone()}
                    oninput={bind_input(email.clone())}
                />
            </div>
            <div class="form-field">
                <label for="contact-subject">{"Subject"}</label>
                <input
                    id="contact-subject"
                    name="subject"
                    type="text"
                    value={(*subject).clone()}
                    oninput={bind_input(subject.clone())}
                />
            </div>
            <div class="form-field">
                <label for="contact-message">{"Message"}</label>
                <textarea
                    id="contact-message"
                    name="message"
                    rows="6"
                    required={true}
                    value={(*body).clone()}
                    oninput={bind_textarea(body.clone())}
                />
            </div>
            <button class="btn btn-primary" type="submit" disabled={sending}>
                {
                    if sending {
                        html! {
                            <>
                                <i class="fa-solid fa-spinner fa-spin" aria-hidden="true"></i>
                                {" Sending..."}
                            </>
                        }
                    } else {
                        html! { "Send Message" }
                    }
                }
            </button>
            {
                submit_view.status().map(|status| html! {
                    <div class={classes!("form-message", status.kind.css_class())}>
                        {status.text}
                    </div>
                })
            }
        </form>
    }
}

fn transition_to_section(id: String, overlay_active: UseStateHandle<bool>) {
    overlay_active.set(true);
    Timeout::new(PAGE_TRANSITION_MS, move || {
        scroll_to_section(&id);
        Timeout::new(OVERLAY_HIDE_DELAY_MS, move || overlay_active.set(false)).forget();
    })
    .forget();
}

#[function_component(App)]
fn app() -> Html {
    let theme_manager = use_mut_ref(|| ThemeManager::initialize(BrowserPreferences));
    let theme = use_state(|| theme_manager.borrow().current());
    let overlay_active = use_state(|| false);

    {
        let current = *theme;
        use_effect_with((), move |_| {
            apply_theme(current);
            init_particles();
            init_scroll_reveal();
            init_lazy_images();
            preload_critical_images();
            wire_parallax();
            wire_resize_refresh();
            reveal_page();
            || ()
        });
    }

    let on_toggle_theme = {
        let theme = theme.clone();
        let theme_manager = theme_manager.clone();
        Callback::from(move |()| {
            let next = theme_manager.borrow_mut().toggle();
            apply_theme(next);
            animate_theme_change();
            theme.set(next);
        })
    };

    let on_navigate = {
        let overlay_active = overlay_active.clone();
        Callback::from(move |id: String| transition_to_section(id, overlay_active.clone()))
    };

    let typing_words: Vec<AttrValue> = TYPING_WORDS.iter().map(|word| AttrValue::from(*word)).collect();

    let hero_cta = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            on_navigate.emit("projects".to_string());
        })
    };

    html! {
        <>
            <Navbar theme={*theme} on_toggle_theme={on_toggle_theme} on_navigate={on_navigate.clone()} />
            <div class={classes!("page-transition", (*overlay_active).then_some("active"))}></div>
            <CustomCursor />
            <main>
                <section id="home" class="hero">
                    <div id="particles-js" class="particles-layer"></div>
                    <div class="hero-content">
                        <p class="hero-kicker">{"Hi, my name is"}</p>
                        <h1 class="hero-title">{"Sam Rivera"}</h1>
                        <p class="hero-subtitle">
                            {"I'm a "}
                            <TypingText words={typing_words} />
                        </p>
                        <a class="btn btn-primary" href="#projects" onclick={hero_cta}>
                            {"View my work"}
                        </a>
                    </div>
                </section>

                <section id="about" class="section-block" data-aos="fade-up">
                    <h2>{"About"}</h2>
                    <p>
                        {"Software engineer focused on dependable web tooling and the \
                          occasional hardware side quest. I like small systems with \
                          sharp contracts."}
                    </p>
                </section>

                <section id="skills" class="section-block" data-aos="fade-up">
                    <h2>{"Skills"}</h2>
                    <div class="skills-grid">
                        <div class="skill-category">
                            <h3>{"Languages"}</h3>
                            <p>{"Rust, TypeScript, Python, SQL"}</p>
                        </div>
                        <div class="skill-category">
                            <h3>{"Frontend"}</h3>
                            <p>{"Yew, WebAssembly, CSS"}</p>
                        </div>
                        <div class="skill-category">
                            <h3>{"Backend"}</h3>
                            <p>{"Axum, PostgreSQL, Redis"}</p>
                        </div>
                    </div>
                </section>

                <section id="projects" class="section-block" data-aos="fade-up">
                    <h2>{"Projects"}</h2>
                    <div class="projects-grid">
                        <article class="project-item">
                            <img
                                class="lazy"
                                data-src="images/project-trailhead.jpg"
                                alt="Trailhead route planner screenshot"
                            />
                            <h3>{"Trailhead"}</h3>
                            <p>{"Offline-first route planner for long-distance hikes."}</p>
                        </article>
                        <article class="project-item">
                            <img
                                class="lazy"
                                data-src="images/project-ledgerline.jpg"
                                alt="Ledgerline budget dashboard screenshot"
                            />
                            <h3>{"Ledgerline"}</h3>
                            <p>{"Self-hosted budget tracker with plain-text import."}</p>
                        </article>
                        <article class="project-item">
                            <img
                                class="lazy"
                                data-src="images/project-relay.jpg"
                                alt="Relay status page screenshot"
                            />
                            <h3>{"Relay"}</h3>
                            <p>{"Tiny status page that pings what you tell it to."}</p>
                        </article>
                    </div>
                </section>

                <section id="contact" class="section-block" data-aos="fade-up">
                    <h2>{"Contact"}</h2>
                    <p>{"Have a project in mind? Send a note."}</p>
                    <ContactForm />
                </section>
            </main>
            <footer class="site-footer">
                <p>{"© 2025 Sam Rivera"}</p>
            </footer>
        </>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
