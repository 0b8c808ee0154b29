//! Session lifecycle around a `World`.
//!
//! `TRexGame` owns the simulation, the surface it draws on, a frame scheduler
//! and an input source. `start` binds input and begins the
//! update-then-draw loop; each frame asks the scheduler for the next one.
//! `destroy` is the single release path: it invalidates the loop, cancels the
//! pending frame, drops any undelivered game-over and detaches input.
//!
//! Game over is reported through the completion callback exactly once per
//! session, `game_over_delay_ms` after the crash frame (measured on frame
//! timestamps), from inside the frame loop and never from the collision check
//! itself. A session destroyed before that point never reports.

use std::cell::{Cell, Ref, RefCell, RefMut};
use std::rc::Rc;

use crate::config::GameConfig;
use crate::error::EngineError;
use crate::input::{InputSource, Intent, IntentSink};
use crate::model::SessionState;
use crate::render::{draw_frame, Surface};
use crate::rng::RandomSource;
use crate::scheduler::{FrameCallback, FrameHandle, FrameScheduler};
use crate::world::World;

pub type GameOverCallback = Rc<dyn Fn(u32)>;

#[derive(Clone, Copy, Debug)]
struct PendingGameOver {
    score: u32,
    crashed_at: f64,
}

struct Shared<Sch, Srf> {
    world: RefCell<World>,
    surface: RefCell<Srf>,
    scheduler: Sch,
    on_game_over: GameOverCallback,
    frame: Cell<Option<FrameHandle>>,
    /// Bumped by `start` and `destroy`; stale frame callbacks compare against it.
    generation: Cell<u64>,
    live: Cell<bool>,
    pending: Cell<Option<PendingGameOver>>,
}

pub struct TRexGame<Sch, Inp, Srf>
where
    Sch: FrameScheduler + 'static,
    Inp: InputSource,
    Srf: Surface + 'static,
{
    shared: Rc<Shared<Sch, Srf>>,
    input: Inp,
    binding: Option<Inp::Guard>,
}

impl<Sch, Inp, Srf> TRexGame<Sch, Inp, Srf>
where
    Sch: FrameScheduler + 'static,
    Inp: InputSource,
    Srf: Surface + 'static,
{
    /// Builds an idle engine. Nothing is bound or scheduled until `start`.
    pub fn new(
        config: GameConfig,
        rng: Box<dyn RandomSource>,
        scheduler: Sch,
        input: Inp,
        surface: Srf,
        on_game_over: impl Fn(u32) + 'static,
    ) -> Result<Self, EngineError> {
        let world = World::new(config, rng)?;
        Ok(Self {
            shared: Rc::new(Shared {
                world: RefCell::new(world),
                surface: RefCell::new(surface),
                scheduler,
                on_game_over: Rc::new(on_game_over),
                frame: Cell::new(None),
                generation: Cell::new(0),
                live: Cell::new(false),
                pending: Cell::new(None),
            }),
            input,
            binding: None,
        })
    }

    /// Resets and (re)starts the loop. Calling it again restarts from scratch.
    pub fn start(&mut self) -> Result<(), EngineError> {
        let shared = &self.shared;
        if let Some(handle) = shared.frame.take() {
            shared.scheduler.cancel_frame(handle);
        }
        shared.generation.set(shared.generation.get() + 1);
        shared.pending.set(None);
        shared.world.borrow_mut().reset();
        draw_frame(&shared.world.borrow(), &mut *shared.surface.borrow_mut());

        if self.binding.is_none() {
            let binding = self.input.attach(intent_sink(shared))?;
            self.binding = Some(binding);
        }
        shared.live.set(true);
        request_next(shared)?;
        log::info!("session started");
        Ok(())
    }

    /// Stops the loop and releases input. No-op if not started.
    pub fn destroy(&mut self) {
        let shared = &self.shared;
        if !shared.live.get() && self.binding.is_none() {
            return;
        }
        shared.live.set(false);
        shared.generation.set(shared.generation.get() + 1);
        if let Some(handle) = shared.frame.take() {
            shared.scheduler.cancel_frame(handle);
        }
        if shared.pending.take().is_some() {
            log::info!("destroyed before game over was reported; dropping it");
        }
        self.binding = None;
        log::info!("engine destroyed");
    }

    /// Feeds an intent directly, as a bound listener would.
    pub fn send(&self, intent: Intent) {
        if self.shared.live.get() {
            self.shared.world.borrow_mut().apply(intent);
        }
    }

    pub fn world(&self) -> Ref<'_, World> {
        self.shared.world.borrow()
    }

    /// Direct access for hosts that script a scenario (placing obstacles and
    /// the like). Must not be held across a frame.
    pub fn world_mut(&self) -> RefMut<'_, World> {
        self.shared.world.borrow_mut()
    }

    pub fn surface(&self) -> Ref<'_, Srf> {
        self.shared.surface.borrow()
    }

    pub fn state(&self) -> SessionState {
        self.shared.world.borrow().state()
    }

    /// True between `start` and `destroy`.
    pub fn is_live(&self) -> bool {
        self.shared.live.get()
    }
}

impl<Sch, Inp, Srf> Drop for TRexGame<Sch, Inp, Srf>
where
    Sch: FrameScheduler + 'static,
    Inp: InputSource,
    Srf: Surface + 'static,
{
    fn drop(&mut self) {
        self.destroy();
    }
}

fn intent_sink<Sch, Srf>(shared: &Rc<Shared<Sch, Srf>>) -> IntentSink
where
    Sch: FrameScheduler + 'static,
    Srf: Surface + 'static,
{
    let weak = Rc::downgrade(shared);
    Rc::new(move |intent| {
        if let Some(shared) = weak.upgrade() {
            if shared.live.get() {
                shared.world.borrow_mut().apply(intent);
            }
        }
    })
}

fn request_next<Sch, Srf>(shared: &Rc<Shared<Sch, Srf>>) -> Result<(), EngineError>
where
    Sch: FrameScheduler + 'static,
    Srf: Surface + 'static,
{
    let weak = Rc::downgrade(shared);
    let generation = shared.generation.get();
    let callback: FrameCallback = Box::new(move |timestamp| {
        let Some(shared) = weak.upgrade() else { return };
        if shared.live.get() && shared.generation.get() == generation {
            on_frame(&shared, timestamp);
        }
    });
    let handle = shared.scheduler.request_frame(callback)?;
    shared.frame.set(Some(handle));
    Ok(())
}

fn on_frame<Sch, Srf>(shared: &Rc<Shared<Sch, Srf>>, timestamp: f64)
where
    Sch: FrameScheduler + 'static,
    Srf: Surface + 'static,
{
    shared.frame.set(None);

    let crashed = shared.world.borrow_mut().tick();
    if let Some(score) = crashed {
        shared.pending.set(Some(PendingGameOver {
            score,
            crashed_at: timestamp,
        }));
    }
    draw_frame(&shared.world.borrow(), &mut *shared.surface.borrow_mut());

    let delay = shared.world.borrow().config().game_over_delay_ms;
    let due = match shared.pending.get() {
        Some(p) if crashed.is_none() && timestamp - p.crashed_at >= delay => {
            shared.pending.set(None);
            Some(p.score)
        }
        _ => None,
    };

    if let Err(e) = request_next(shared) {
        log::error!("could not schedule next frame: {}", e);
    }

    if let Some(score) = due {
        log::info!("session over, reporting score {}", score);
        let callback = shared.on_game_over.clone();
        callback(score);
    }
}
