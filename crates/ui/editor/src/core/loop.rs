use color_eyre::Result;
use ratatui::prelude::Rect;
use tokio::sync::mpsc::{self, UnboundedSender};
use tracing::{debug, error, info, trace};

use crate::{
    action::Action,
    components::{
        Component,
        popups::{AlertPopup, ChoicePopup},
    },
    core::{
        app::EditorApp,
        effects::{Effect, InternalEvent},
        executor::TaskExecutor,
        intent_model::FormIntent,
        reducer::{reduce, reduce_internal_event},
    },
    tui::{Event, EventResponse, Tui},
};

/// The application event loop.
///
/// Owns the terminal while borrowing `EditorApp`. Each turn:
/// 1. one terminal event is routed popup > page > global
/// 2. queued actions are applied (intents go through the reducer)
/// 3. results of background tasks are reduced
/// 4. reducer-requested focus moves and quit are honoured
pub struct AppLoop<'a> {
    app: &'a mut EditorApp,
    tui: Tui,
}

impl<'a> AppLoop<'a> {
    pub fn new(app: &'a mut EditorApp) -> Result<Self> {
        let tui = Tui::new()?
            .tick_rate(app.config.tick_rate)
            .frame_rate(app.config.frame_rate);
        Ok(Self { app, tui })
    }

    /// Run until the form asks to quit.
    pub async fn run(&mut self) -> Result<()> {
        let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
        let (internal_tx, mut internal_rx) = mpsc::unbounded_channel::<InternalEvent>();
        let executor = TaskExecutor::new(self.app.client.clone(), internal_tx);

        self.tui.enter()?;
        action_tx.send(Action::Form(FormIntent::Init)).ok();

        loop {
            if let Some(ev) = self.tui.next().await {
                self.route_event(ev, &action_tx)?;
            }

            while let Ok(action) = action_rx.try_recv() {
                self.handle_action(action, &action_tx, &executor)?;
            }

            while let Ok(event) = internal_rx.try_recv() {
                if let InternalEvent::TaskStarted { id, label } = &event {
                    trace!("[task:{id}] running {label}");
                }
                let effects = reduce_internal_event(&mut self.app.state, event);
                self.handle_effects(effects, &executor);
            }

            if let Some(key) = self.app.state.pending_focus.take() {
                self.app.page.focus_create_input(key, &self.app.state);
            }

            if self.app.state.quit_requested {
                self.tui.stop()?;
                break;
            }
        }

        self.tui.exit()?;
        Ok(())
    }

    fn route_event(&mut self, ev: Event, action_tx: &UnboundedSender<Action>) -> Result<()> {
        let app = &mut *self.app;

        let mut stop_event_propagation = false;
        if let Some(popup) = app.popup.as_mut() {
            let response = popup.handle_events(ev.clone(), &app.state)?;
            stop_event_propagation = forward(response, action_tx)
                || (popup.is_modal() && matches!(ev, Event::Key(_) | Event::Paste(_)));
        }

        if !stop_event_propagation {
            let response = app.page.handle_events(ev.clone(), &app.state)?;
            stop_event_propagation = forward(response, action_tx);
        }

        if !stop_event_propagation {
            match ev {
                Event::Tick => {
                    action_tx.send(Action::Tick).ok();
                }
                Event::Render => {
                    action_tx.send(Action::Render).ok();
                }
                Event::Resize(w, h) => {
                    action_tx.send(Action::Resize(w, h)).ok();
                }
                Event::Error => {
                    action_tx
                        .send(Action::Error("terminal event stream failed".into()))
                        .ok();
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_action(
        &mut self,
        action: Action,
        action_tx: &UnboundedSender<Action>,
        executor: &TaskExecutor,
    ) -> Result<()> {
        match &action {
            Action::Tick | Action::Render | Action::Update => {}
            _ => debug!("{action}"),
        }

        match action {
            Action::Tick => {
                if let Some(next) = self.app.page.update(Action::Tick, &self.app.state)? {
                    action_tx.send(next).ok();
                }
            }
            Action::Render | Action::Update => self.draw(action_tx)?,
            Action::Resize(w, h) => {
                self.tui.resize(Rect::new(0, 0, w, h))?;
                self.draw(action_tx)?;
            }
            Action::Error(message) => error!("{message}"),
            Action::Form(intent) => {
                let effects = reduce(&mut self.app.state, intent);
                self.handle_effects(effects, executor);
            }
            Action::OpenChoice(request) => {
                self.app.popup = Some(Box::new(ChoicePopup::new(request)));
            }
            Action::PopupResult(result) => {
                self.app.popup = None;
                if let Some(next) = self
                    .app
                    .page
                    .update(Action::PopupResult(result), &self.app.state)?
                {
                    action_tx.send(next).ok();
                }
            }
        }
        Ok(())
    }

    fn handle_effects(&mut self, effects: Vec<Effect>, executor: &TaskExecutor) {
        for effect in effects {
            match effect {
                Effect::Log(msg) => info!("[effect] {msg}"),
                Effect::Async(task) => {
                    debug!("[effect] schedule async task: {task}");
                    executor.spawn(task);
                }
                Effect::Submitted(submission) => {
                    let body = serde_json::to_string_pretty(&submission)
                        .unwrap_or_else(|e| format!("could not serialize the product: {e}"));
                    info!("[effect] product submitted: {body}");
                    let popup = AlertPopup::new("Product submitted", body).min_width(48);
                    self.app.popup = Some(Box::new(popup));
                }
            }
        }
    }

    fn draw(&mut self, action_tx: &UnboundedSender<Action>) -> Result<()> {
        self.tui.draw(|f| {
            if let Err(err) = self.app.render(f) {
                action_tx
                    .send(Action::Error(format!("Failed to draw: {err:?}")))
                    .ok();
            }
        })?;
        Ok(())
    }
}

/// Queue the action of a handler response; true when propagation stops.
fn forward(response: Option<EventResponse<Action>>, action_tx: &UnboundedSender<Action>) -> bool {
    match response {
        Some(EventResponse::Continue(action)) => {
            action_tx.send(action).ok();
            false
        }
        Some(EventResponse::Stop(action)) => {
            action_tx.send(action).ok();
            true
        }
        None => false,
    }
}
