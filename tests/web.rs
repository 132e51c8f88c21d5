//! Browser checks for the DOM wiring. Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use portfolio_fx::components::{cursor, dom, hero_text, nav, particle_field, pointer, reveal};
use portfolio_fx::{CancelToken, PointerContext, Theme};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Event, HtmlCanvasElement, HtmlElement, MouseEvent, MouseEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn page(html: &str) {
	let body = dom::document().unwrap().body().unwrap();
	body.set_inner_html(html);
	body.style().set_property("overflow", "").unwrap();
}

async fn sleep(ms: i32) {
	let promise = js_sys::Promise::new(&mut |resolve, _| {
		dom::window()
			.unwrap()
			.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
			.unwrap();
	});
	JsFuture::from(promise).await.unwrap();
}

fn by_id(id: &str) -> HtmlElement {
	dom::document()
		.unwrap()
		.get_element_by_id(id)
		.unwrap()
		.dyn_into()
		.unwrap()
}

#[wasm_bindgen_test]
fn menu_opens_locks_scroll_and_closes_on_link() {
	page(
		r##"<button id="hamburger"></button>
		<div id="mobile-menu"><a id="first-link" href="#about">About</a></div>"##,
	);
	assert!(nav::install_menu(&Theme::default().nav).unwrap());

	let body = dom::document().unwrap().body().unwrap();
	by_id("hamburger").click();
	assert!(by_id("mobile-menu").class_list().contains("open"));
	assert!(by_id("hamburger").class_list().contains("open"));
	assert_eq!(body.style().get_property_value("overflow").unwrap(), "hidden");

	by_id("first-link").click();
	assert!(!by_id("mobile-menu").class_list().contains("open"));
	assert_eq!(body.style().get_property_value("overflow").unwrap(), "");
}

#[wasm_bindgen_test]
fn missing_optional_elements_are_tolerated() {
	page("<main></main>");
	let theme = Theme::default();
	assert!(!nav::install_menu(&theme.nav).unwrap());
	assert!(!nav::install_shadow(&theme.nav).unwrap());
	assert!(!hero_text::install(&theme.hero).unwrap());
	assert_eq!(reveal::install(&theme.reveal).unwrap(), 0);
	assert_eq!(reveal::install(&theme.skill_bar).unwrap(), 0);

	let (pointer, cancel) = (PointerContext::new(), CancelToken::new());
	assert!(!particle_field::install(&theme.field, &pointer, &cancel).unwrap());
	assert!(!cursor::install(&theme.cursor, &pointer, &cancel).unwrap());
	assert!(dom::document().unwrap().get_element_by_id("bg-canvas").is_none());
}

#[wasm_bindgen_test]
fn page_canvas_is_sized_to_the_viewport() {
	page(r#"<canvas id="bg-canvas"></canvas>"#);
	let (pointer, cancel) = (PointerContext::new(), CancelToken::new());
	assert!(particle_field::install(&Theme::default().field, &pointer, &cancel).unwrap());

	let canvas: HtmlCanvasElement = by_id("bg-canvas").dyn_into().unwrap();
	let (w, h) = dom::viewport_size(&dom::window().unwrap()).unwrap();
	assert_eq!(canvas.width(), w as u32);
	assert_eq!(canvas.height(), h as u32);
	assert_eq!(canvas.style().get_property_value("position").unwrap(), "");
	cancel.cancel();
}

#[wasm_bindgen_test]
fn mousemove_reaches_the_pointer_context() {
	let pointer = PointerContext::new();
	pointer::track(&pointer).unwrap();
	assert_eq!(pointer.get(), None);

	let init = MouseEventInit::new();
	init.set_client_x(30);
	init.set_client_y(40);
	let ev = MouseEvent::new_with_mouse_event_init_dict("mousemove", &init).unwrap();
	dom::window().unwrap().dispatch_event(&ev).unwrap();
	assert_eq!(pointer.get(), Some((30.0, 40.0)));
}

#[wasm_bindgen_test]
async fn cursor_marker_moves_and_tracks_hover() {
	page(r##"<div id="cursor-blob"></div><a id="link" href="#">Link</a>"##);
	let (pointer, cancel) = (PointerContext::new(), CancelToken::new());
	pointer.set(200.0, 100.0);
	assert!(cursor::install(&Theme::default().cursor, &pointer, &cancel).unwrap());

	sleep(100).await;
	let left = by_id("cursor-blob").style().get_property_value("left").unwrap();
	assert!(left.ends_with("px"), "left was {left:?}");

	let link = by_id("link");
	link.dispatch_event(&Event::new("mouseenter").unwrap()).unwrap();
	assert!(by_id("cursor-blob").class_list().contains("hovered"));
	link.dispatch_event(&Event::new("mouseleave").unwrap()).unwrap();
	assert!(!by_id("cursor-blob").class_list().contains("hovered"));
	cancel.cancel();
}

#[wasm_bindgen_test]
async fn reveal_marks_visible_once_and_stops_observing() {
	page(r#"<div id="card" class="reveal" style="height: 40px">About</div>"#);
	assert_eq!(reveal::install(&Theme::default().reveal).unwrap(), 1);

	sleep(150).await;
	let card = by_id("card");
	assert!(card.class_list().contains("visible"));

	card.class_list().remove_1("visible").unwrap();
	card.style().set_property("display", "none").unwrap();
	sleep(150).await;
	card.style().set_property("display", "block").unwrap();
	sleep(150).await;
	assert!(!card.class_list().contains("visible"));
}

#[wasm_bindgen_test]
async fn skill_cards_animate_after_their_delay() {
	page(r#"<div id="skill" class="skill-card" style="height: 40px">Rust</div>"#);
	assert_eq!(reveal::install(&Theme::default().skill_bar).unwrap(), 1);

	sleep(100).await;
	assert!(!by_id("skill").class_list().contains("animated"));
	sleep(400).await;
	assert!(by_id("skill").class_list().contains("animated"));
}

#[wasm_bindgen_test]
fn nav_shadow_follows_the_scroll_offset() {
	page(r#"<nav id="nav"></nav><div style="height: 5000px"></div>"#);
	assert!(nav::install_shadow(&Theme::default().nav).unwrap());
	let window = dom::window().unwrap();
	let shadow = || by_id("nav").style().get_property_value("box-shadow").unwrap();

	window.scroll_to_with_x_and_y(0.0, 100.0);
	window.dispatch_event(&Event::new("scroll").unwrap()).unwrap();
	assert!(!shadow().is_empty());
	assert_ne!(shadow(), "none");

	window.scroll_to_with_x_and_y(0.0, 0.0);
	window.dispatch_event(&Event::new("scroll").unwrap()).unwrap();
	assert_eq!(shadow(), "none");
}

#[wasm_bindgen_test]
fn hero_heading_is_split_into_hidden_spans() {
	page(r#"<h1 class="hero-name"> Edlin </h1>"#);
	assert!(hero_text::install(&Theme::default().hero).unwrap());

	let spans = dom::query_all(".hero-name span").unwrap();
	assert_eq!(spans.len(), 5);
	let first: HtmlElement = spans[0].clone().dyn_into().unwrap();
	assert_eq!(first.text_content().as_deref(), Some("E"));
	assert_eq!(first.style().get_property_value("opacity").unwrap(), "0");
}

#[wasm_bindgen_test]
async fn hero_spans_settle_fully_visible() {
	page(r#"<h1 class="hero-name">Hi there</h1>"#);
	assert!(hero_text::install(&Theme::default().hero).unwrap());

	sleep(300).await;
	let spans = dom::query_all(".hero-name span").unwrap();
	assert_eq!(spans.len(), 8);
	for span in spans {
		let span: HtmlElement = span.dyn_into().unwrap();
		assert_eq!(span.style().get_property_value("opacity").unwrap(), "1");
	}
}
