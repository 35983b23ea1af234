use std::slice::Iter;

use crate::error::MvtError;

const MOVE_TO: u32 = 1;
const LINE_TO: u32 = 2;
const CLOSE_PATH: u32 = 7;

/// Geometry command with its absolute position in tile pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    MoveTo(i64, i64),
    LineTo(i64, i64),
    ClosePath,
}

/// Iterates over the geometry commands of a feature, accumulating the delta-encoded parameters.
///
/// The iterator stops after the first error.
pub(crate) struct CommandIterator<'a> {
    inner: Iter<'a, u32>,
    current_command: Option<(u32, u32)>,
    can_continue: bool,
    cursor: (i64, i64),
}

impl<'a> CommandIterator<'a> {
    pub(crate) fn new(commands: &'a [u32]) -> Self {
        Self {
            inner: commands.iter(),
            current_command: None,
            can_continue: true,
            cursor: (0, 0),
        }
    }

    fn read_point(&mut self) -> Result<(i64, i64), MvtError> {
        let [dx, dy] = self.read_vals::<2>()?;
        self.cursor = (
            self.cursor.0 + sint_to_int(dx) as i64,
            self.cursor.1 + sint_to_int(dy) as i64,
        );
        Ok(self.cursor)
    }

    fn read_vals<const COUNT: usize>(&mut self) -> Result<[u32; COUNT], MvtError> {
        let mut result = [0; COUNT];
        for val in result.iter_mut() {
            *val = match self.inner.next() {
                Some(v) => *v,
                None => {
                    return Err(MvtError::Generic(
                        "Expected value to be present, but found end of data".into(),
                    ));
                }
            };
        }

        Ok(result)
    }
}

fn sint_to_int(sint: u32) -> i32 {
    ((sint >> 1) as i32) ^ -((sint & 1) as i32)
}

impl Iterator for CommandIterator<'_> {
    type Item = Result<Command, MvtError>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.can_continue {
            return None;
        }

        let (command_id, command_count) = match self.current_command {
            Some(command) => command,
            None => {
                let command_integer = *self.inner.next()?;
                (command_integer & 0x7, command_integer >> 3)
            }
        };

        self.current_command = match command_count {
            0 => {
                self.can_continue = false;
                return Some(Err(MvtError::Generic("Command count cannot be 0".into())));
            }
            1 => None,
            v => Some((command_id, v - 1)),
        };

        let result = match command_id {
            MOVE_TO => self.read_point().map(|(x, y)| Command::MoveTo(x, y)),
            LINE_TO => self.read_point().map(|(x, y)| Command::LineTo(x, y)),
            CLOSE_PATH if command_count == 1 => Ok(Command::ClosePath),
            CLOSE_PATH => Err(MvtError::Generic(format!(
                "ClosePath command must have count 1, but has {command_count}"
            ))),
            _ => Err(MvtError::Generic(format!(
                "Unknown command id {command_id}"
            ))),
        };

        if result.is_err() {
            self.can_continue = false;
        }

        Some(result)
    }
}

/// Encodes a command integer. Used to build geometries in tests.
#[cfg(test)]
pub(crate) fn command_integer(id: u32, count: u32) -> u32 {
    (id & 0x7) | (count << 3)
}

/// Zig-zag encodes a parameter. Used to build geometries in tests.
#[cfg(test)]
pub(crate) fn param(value: i32) -> u32 {
    ((value << 1) ^ (value >> 31)) as u32
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn sint_to_int_test() {
        assert_eq!(sint_to_int(0), 0);
        assert_eq!(sint_to_int(1), -1);
        assert_eq!(sint_to_int(2), 1);
        assert_eq!(sint_to_int(3), -2);
        assert_eq!(sint_to_int(0xfffffffe), 0x7fffffff);
        assert_eq!(sint_to_int(0xffffffff), i32::MIN);
    }

    #[test]
    fn param_encoding() {
        for v in [0, 1, -1, 25, -4096, i32::MAX, i32::MIN] {
            assert_eq!(sint_to_int(param(v)), v);
        }
    }

    #[test]
    fn accumulates_cursor() {
        // Square from the vector tile specification: MoveTo(3, 6), LineTo(8, 12), LineTo(20, 34), ClosePath.
        let commands = [
            command_integer(MOVE_TO, 1),
            param(3),
            param(6),
            command_integer(LINE_TO, 2),
            param(5),
            param(6),
            param(12),
            param(22),
            command_integer(CLOSE_PATH, 1),
        ];

        let decoded: Result<Vec<_>, _> = CommandIterator::new(&commands).collect();
        assert_eq!(
            decoded,
            Ok(vec![
                Command::MoveTo(3, 6),
                Command::LineTo(8, 12),
                Command::LineTo(20, 34),
                Command::ClosePath,
            ])
        );
    }

    #[test]
    fn stops_on_truncated_data() {
        let commands = [command_integer(MOVE_TO, 2), param(1), param(1), param(2)];
        let mut iter = CommandIterator::new(&commands);

        assert_eq!(iter.next(), Some(Ok(Command::MoveTo(1, 1))));
        assert_matches!(iter.next(), Some(Err(MvtError::Generic(_))));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn invalid_commands() {
        let zero_count = [command_integer(MOVE_TO, 0)];
        let mut iter = CommandIterator::new(&zero_count);
        assert_matches!(iter.next(), Some(Err(_)));
        assert_eq!(iter.next(), None);

        let repeated_close = [command_integer(CLOSE_PATH, 2)];
        let mut iter = CommandIterator::new(&repeated_close);
        assert_matches!(iter.next(), Some(Err(_)));
        assert_eq!(iter.next(), None);

        let unknown_id = [command_integer(5, 1), 0, 0];
        let mut iter = CommandIterator::new(&unknown_id);
        assert_matches!(iter.next(), Some(Err(MvtError::Generic(msg))) if msg == "Unknown command id 5");
        assert_eq!(iter.next(), None);
    }
}
