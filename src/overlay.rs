use std::cell::Cell;
use std::rc::Rc;

use druid::{
    AppDelegate, AppLauncher, BoxConstraints, Color, Data, DelegateCtx, Env, Event, EventCtx,
    LayoutCtx, LifeCycle, LifeCycleCtx, PaintCtx, RenderContext, Size, UpdateCtx, Widget,
    WindowDesc, WindowId,
};

use crate::display::PrimaryDisplay;
use crate::error::Result;
use crate::selection::{DragState, Selection};

/// Barely-there tint: keeps the window hit-testable while the desktop shows through.
const BACKDROP: Color = Color::rgba8(0, 0, 0, 26);
const OUTLINE: Color = Color::RED;

#[derive(Clone, Data)]
struct OverlayState {
    #[data(same_fn = "PartialEq::eq")]
    drag: DragState,
}

/// Full-window surface that turns mouse input into a `DragState`.
struct CaptureView {
    /// Read by `run` once the event loop has returned.
    outcome: Rc<Cell<DragState>>,
}

impl Widget<OverlayState> for CaptureView {
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, data: &mut OverlayState, _env: &Env) {
        match event {
            Event::MouseDown(e) if e.button.is_left() => {
                data.drag.press(e.pos);
                ctx.set_active(true);
                log::debug!("Mouse down at: ({}, {})", e.pos.x, e.pos.y);
            }

            Event::MouseMove(e) if data.drag.is_dragging() => {
                if data.drag.drag(e.pos).is_some() {
                    ctx.request_paint();
                }
                log::debug!("Mouse dragged to: ({}, {})", e.pos.x, e.pos.y);
            }

            Event::MouseUp(e) if e.button.is_left() => {
                ctx.set_active(false);
                log::debug!("Mouse up at: ({}, {})", e.pos.x, e.pos.y);
                if data.drag.release() {
                    self.outcome.set(data.drag);
                    // handled after this event returns, never from inside it
                    ctx.submit_command(druid::commands::QUIT_APP);
                }
            }
            _ => {}
        }
    }

    fn lifecycle(
        &mut self,
        _ctx: &mut LifeCycleCtx,
        _event: &LifeCycle,
        _data: &OverlayState,
        _env: &Env,
    ) {
    }

    fn update(
        &mut self,
        ctx: &mut UpdateCtx,
        old: &OverlayState,
        data: &OverlayState,
        _env: &Env,
    ) {
        if !old.same(data) {
            ctx.request_paint();
        }
    }

    fn layout(
        &mut self,
        _ctx: &mut LayoutCtx,
        bc: &BoxConstraints,
        _data: &OverlayState,
        _env: &Env,
    ) -> Size {
        bc.max()
    }

    fn paint(&mut self, ctx: &mut PaintCtx, data: &OverlayState, _env: &Env) {
        let full_rect = ctx.size().to_rect();
        ctx.fill(full_rect, &BACKDROP);

        if let Some(r) = data.drag.visible_rect() {
            ctx.stroke(r, &OUTLINE, 1.0);
        }
    }
}

struct OverlayDelegate;

impl AppDelegate<OverlayState> for OverlayDelegate {
    fn event(
        &mut self,
        _ctx: &mut DelegateCtx,
        _window_id: WindowId,
        event: Event,
        _data: &mut OverlayState,
        _env: &Env,
    ) -> Option<Event> {
        if let Event::WindowConnected = event {
            log::debug!("Application did finish launching");
        }
        Some(event)
    }
}

/// Covers `display` with the overlay and blocks until the user releases the mouse or the
/// window goes away.
pub fn run(display: &PrimaryDisplay) -> Result<Option<Selection>> {
    let outcome = Rc::new(Cell::new(DragState::default()));

    log::debug!("Creating view...");
    let view = CaptureView { outcome: Rc::clone(&outcome) };

    let window = WindowDesc::new(view)
        .title("rsel")
        .show_titlebar(false)
        .resizable(false)
        .transparent(true)
        .set_always_on_top(true)
        .set_position(display.origin())
        .window_size(display.size());

    // druid shows the window and gives it focus when the launcher starts
    log::debug!("Making window key and visible...");
    let launcher = AppLauncher::with_window(window);

    log::debug!("Setting up application delegate...");
    let launcher = launcher.delegate(OverlayDelegate);

    log::debug!("Running application...");
    launcher.launch(OverlayState { drag: DragState::default() })?;

    Ok(outcome.get().selection())
}
