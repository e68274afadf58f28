//! The per-frame pipeline: sample scroll, smooth it, render the stage and
//! update the DOM overlays. Driven by `requestAnimationFrame`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use varg_core::{
    sample_keys, MotionProfile, OverlaySet, Spring, Timeline, HERO_ROTATION_KEYS, HERO_SCALE_KEYS,
    PARALLAX_DAMPING, PARALLAX_STIFFNESS, SCROLL_REST_DELTA,
};

use crate::{decor, dom, draw, overlay, scroll};

pub struct FrameContext {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub container: web::Element,
    pub images: Vec<web::HtmlImageElement>,
    pub timeline: Timeline,
    pub overlays: OverlaySet,
    pub overlay_els: Vec<Option<web::Element>>,
    pub progress_bar: Option<web::Element>,
    pub scroll_hint: Option<web::Element>,
    pub reveals: Vec<web::Element>,
    pub profile: Rc<Cell<MotionProfile>>,
    pub decor: decor::DecorState,
    scroll_spring: Spring,
    parallax_spring: Spring,
    started: Instant,
    last_instant: Instant,
    last_progress: f32,
}

impl FrameContext {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        canvas: web::HtmlCanvasElement,
        ctx: web::CanvasRenderingContext2d,
        container: web::Element,
        images: Vec<web::HtmlImageElement>,
        overlay_els: Vec<Option<web::Element>>,
        progress_bar: Option<web::Element>,
        scroll_hint: Option<web::Element>,
        reveals: Vec<web::Element>,
        profile: Rc<Cell<MotionProfile>>,
        seed: u64,
    ) -> Self {
        let now = Instant::now();
        Self {
            canvas,
            ctx,
            container,
            images,
            timeline: Timeline::hero(),
            overlays: OverlaySet::hero(),
            overlay_els,
            progress_bar,
            scroll_hint,
            reveals,
            profile,
            decor: decor::DecorState::new(seed),
            scroll_spring: Spring::scroll(),
            parallax_spring: Spring::new(
                PARALLAX_STIFFNESS,
                PARALLAX_DAMPING,
                SCROLL_REST_DELTA,
                0.0,
            ),
            started: now,
            last_instant: now,
            last_progress: 0.0,
        }
    }

    /// One animation-frame tick.
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let Some(window) = web::window() else {
            return;
        };
        let viewport_h = dom::viewport_height(&window);
        let raw = scroll::hero_progress(&self.container, viewport_h);

        // Reduced motion means no smoothing lag either.
        let (progress, soft) = if self.profile.get().reduced_motion {
            self.scroll_spring.snap_to(raw);
            self.parallax_spring.snap_to(raw);
            (raw, raw)
        } else {
            (
                self.scroll_spring.step(raw, dt),
                self.parallax_spring.step(raw, dt),
            )
        };
        self.last_progress = progress;

        let time = (now - self.started).as_secs_f32();
        self.render(progress, soft, time);
        self.update_dom(progress);
        self.update_reveals(viewport_h);
    }

    /// Repaint with the last smoothed progress, e.g. after a resize.
    pub fn redraw(&mut self) {
        let time = (Instant::now() - self.started).as_secs_f32();
        self.render(self.last_progress, self.parallax_spring.value(), time);
    }

    fn render(&self, progress: f32, soft: f32, time: f32) {
        let profile = self.profile.get();
        let vp = draw::Viewport::of_canvas(&self.canvas);
        draw::clear(&self.ctx, &vp);
        decor::draw_parallax(&self.ctx, &vp, soft, &self.decor.dust, time, &profile);
        decor::draw_rings(&self.ctx, &vp, time, progress, &profile);

        let win = self.timeline.sample(progress);
        let rotation = sample_keys(HERO_ROTATION_KEYS, progress);
        let zoom = sample_keys(HERO_SCALE_KEYS, progress);
        draw::draw_sequence(
            &self.ctx,
            &vp,
            &self.images,
            &win,
            rotation,
            zoom,
            progress,
            &profile,
        );

        decor::draw_waves(&self.ctx, &vp, &self.decor.bars, time, progress, &profile);
        decor::draw_center_bars(&self.ctx, &vp, time, progress, &profile);
        decor::draw_freq_dots(&self.ctx, &vp, &self.decor.dots, time, progress, &profile);
        decor::draw_vignette(&self.ctx, &vp);
    }

    fn update_dom(&self, progress: f32) {
        let states = self.overlays.states(progress);
        for (el, state) in self.overlay_els.iter().zip(states.iter()) {
            if let Some(el) = el {
                overlay::apply_overlay(el, state);
            }
        }
        if let Some(bar) = &self.progress_bar {
            overlay::set_progress_bar(bar, progress);
        }
        if let Some(hint) = &self.scroll_hint {
            overlay::update_scroll_hint(hint, progress);
        }
    }

    /// One-shot reveal of the content sections below the hero.
    fn update_reveals(&mut self, viewport_h: f64) {
        self.reveals.retain(|el| {
            let rect = el.get_bounding_client_rect();
            if rect.top() < viewport_h - 50.0 {
                let _ = el.class_list().add_1("visible");
                false
            } else {
                true
            }
        });
    }
}

/// Kick off the requestAnimationFrame loop.
pub fn start_loop(context: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        context.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
}
