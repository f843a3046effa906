// ============================================
// Input - Клавиши и очередь движений мыши
// ============================================
// Поток захвата ввода пишет в ограниченную очередь и никогда не блокируется:
// если очередь полна, сэмпл отбрасывается. Поток симуляции выгребает
// очередь целиком раз в тик, в порядке FIFO.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

/// Состояние клавиш движения
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

/// Смещение указателя за одно событие
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseMove {
    pub dx: f64,
    pub dy: f64,
}

/// Сторона производителя (поток ввода)
#[derive(Clone)]
pub struct MouseSender {
    tx: Sender<MouseMove>,
}

/// Сторона потребителя (поток симуляции)
pub struct MouseReceiver {
    rx: Receiver<MouseMove>,
}

/// Создать очередь движений мыши ёмкостью `capacity`
pub fn mouse_queue(capacity: usize) -> (MouseSender, MouseReceiver) {
    let (tx, rx) = bounded(capacity);
    (MouseSender { tx }, MouseReceiver { rx })
}

impl MouseSender {
    /// Положить сэмпл. false если очередь полна или потребитель закрыт.
    pub fn push(&self, dx: f64, dy: f64) -> bool {
        match self.tx.try_send(MouseMove { dx, dy }) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                log::trace!("mouse queue full, sample dropped");
                false
            }
            Err(TrySendError::Disconnected(_)) => false,
        }
    }
}

impl MouseReceiver {
    /// Забрать всё, что накопилось к этому моменту
    pub fn drain(&self) -> impl Iterator<Item = MouseMove> + '_ {
        self.rx.try_iter()
    }

    pub fn pending(&self) -> usize {
        self.rx.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_is_fifo() {
        let (tx, rx) = mouse_queue(8);
        for i in 0..5 {
            assert!(tx.push(i as f64, -(i as f64)));
        }

        let moves: Vec<MouseMove> = rx.drain().collect();
        assert_eq!(moves.len(), 5);
        for (i, mv) in moves.iter().enumerate() {
            assert_eq!(mv.dx, i as f64);
            assert_eq!(mv.dy, -(i as f64));
        }
        assert_eq!(rx.pending(), 0);
    }

    #[test]
    fn test_full_queue_drops_without_blocking() {
        let (tx, rx) = mouse_queue(2);
        assert!(tx.push(1.0, 0.0));
        assert!(tx.push(2.0, 0.0));
        assert!(!tx.push(3.0, 0.0));

        let dx: Vec<f64> = rx.drain().map(|m| m.dx).collect();
        assert_eq!(dx, vec![1.0, 2.0]);
    }

    #[test]
    fn test_push_from_another_thread() {
        let (tx, rx) = mouse_queue(64);
        let handle = std::thread::spawn(move || {
            for i in 0..32 {
                tx.push(i as f64, 0.0);
            }
        });
        handle.join().unwrap();

        let dx: Vec<f64> = rx.drain().map(|m| m.dx).collect();
        assert_eq!(dx, (0..32).map(|i| i as f64).collect::<Vec<_>>());
    }

    #[test]
    fn test_push_after_receiver_dropped() {
        let (tx, rx) = mouse_queue(4);
        drop(rx);
        assert!(!tx.push(1.0, 1.0));
    }
}
