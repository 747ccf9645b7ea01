use std::io;
use std::time::Duration;

use crossterm::event::Event;

use crate::drivers::InputDriver;

pub enum ControlFlow {
    Continue,
    Quit,
}

/// Synchronous event pump for the overlay.
///
/// Owns the input driver and the poll cadence; the handler owns routing and
/// rendering. Events are delivered one at a time in arrival order, which is
/// what keeps drag sessions strictly down-move-up sequenced.
pub struct EventLoop<D> {
    driver: D,
    poll_interval: Duration,
}

impl<D: InputDriver> EventLoop<D> {
    pub fn new(driver: D, poll_interval: Duration) -> Self {
        Self {
            driver,
            poll_interval,
        }
    }

    pub fn driver(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Run until the handler asks to quit.
    ///
    /// The handler is called with `Some(event)` for each input event and
    /// with `None` on poll-interval ticks so the host can redraw.
    pub fn run<F>(&mut self, mut handler: F) -> io::Result<()>
    where
        F: FnMut(&mut D, Option<Event>) -> io::Result<ControlFlow>,
    {
        loop {
            if let ControlFlow::Quit = handler(&mut self.driver, None)? {
                break;
            }

            if self.driver.poll(self.poll_interval)? {
                // Drain bursts so rendering does not fall behind the input
                // stream during fast mouse drags.
                loop {
                    let event = self.driver.read()?;
                    if let ControlFlow::Quit = handler(&mut self.driver, Some(event))? {
                        return Ok(());
                    }
                    if !self.driver.poll(Duration::from_millis(0))? {
                        break;
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::scripted::ScriptedInputDriver;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn run_delivers_events_in_order_then_quits() {
        let events = vec![
            Event::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE)),
            Event::Key(KeyEvent::new(KeyCode::Char('b'), KeyModifiers::NONE)),
        ];
        let mut seen = Vec::new();
        let mut event_loop =
            EventLoop::new(ScriptedInputDriver::new(events), Duration::from_millis(0));
        event_loop
            .run(|driver, event| {
                if let Some(Event::Key(key)) = event {
                    seen.push(key.code);
                }
                if driver.is_exhausted() && event.is_some() {
                    return Ok(ControlFlow::Quit);
                }
                Ok(ControlFlow::Continue)
            })
            .unwrap();
        assert_eq!(seen, vec![KeyCode::Char('a'), KeyCode::Char('b')]);
    }
}
