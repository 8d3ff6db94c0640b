use crate::domain::{Arena, Particle, ParticleKind, PopulationCounts, Renderer};
use crate::interface_adapters::protocol::{CountsDto, ParticleDto, PositionDto, RenderEvent};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::broadcast;
use tracing::{error, warn};

/// Renderer that publishes render events on a broadcast channel.
///
/// Sending never blocks the tick; slow consumers lag and skip events instead.
#[derive(Debug, Clone)]
pub struct ChannelRenderer {
    arena: Arena,
    events_tx: broadcast::Sender<RenderEvent>,
}

impl ChannelRenderer {
    pub fn new(arena: Arena, events_tx: broadcast::Sender<RenderEvent>) -> Self {
        Self { arena, events_tx }
    }

    fn publish(&self, event: RenderEvent) {
        // No subscribers is fine; the event is simply dropped.
        let _ = self.events_tx.send(event);
    }
}

impl Renderer for ChannelRenderer {
    fn arena(&self) -> Arena {
        self.arena
    }

    fn particle_created(&mut self, particle: &Particle) {
        self.publish(RenderEvent::Spawn(ParticleDto::from(particle)));
    }

    fn particle_moved(&mut self, particle: &Particle) {
        self.publish(RenderEvent::Move(PositionDto::from(particle)));
    }

    fn particle_removed(&mut self, particle: &Particle) {
        self.publish(RenderEvent::Remove { id: particle.id.0 });
    }

    fn counts_changed(&mut self, counts: PopulationCounts) {
        self.publish(RenderEvent::Counts(CountsDto::from(counts)));
    }

    fn announce_winner(&mut self, winner: ParticleKind) {
        self.publish(RenderEvent::Winner(winner.into()));
    }
}

/// Writes each render event as one JSON line until the channel closes or the output
/// fails. After an output error the simulation keeps running without a listener.
///
/// Returns the writer so callers can inspect or reuse it.
pub async fn render_event_writer<W>(mut events_rx: broadcast::Receiver<RenderEvent>, mut out: W) -> W
where
    W: AsyncWrite + Unpin,
{
    loop {
        match events_rx.recv().await {
            Ok(event) => {
                let mut line = match serde_json::to_string(&event) {
                    Ok(line) => line,
                    Err(e) => {
                        error!(error = ?e, "failed to serialize render event");
                        continue;
                    }
                };
                line.push('\n');

                if let Err(e) = out.write_all(line.as_bytes()).await {
                    error!(error = %e, "failed to write render event; stopping render output");
                    break;
                }
                if let Err(e) = out.flush().await {
                    error!(error = %e, "failed to flush render output; stopping render output");
                    break;
                }
            }
            Err(broadcast::error::RecvError::Lagged(n)) => {
                warn!(missed = n, "render writer lagged; skipping to latest event");
            }
            Err(broadcast::error::RecvError::Closed) => {
                break;
            }
        }
    }

    out
}
