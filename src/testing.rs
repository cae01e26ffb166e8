//! Utilities for the test suite.

use quickcheck::{ empty_shrinker, Arbitrary, Gen };

use crate::RemoteData;


/// The identity function.
pub fn id<T>(t: T) -> T { t }

/// Function composition, `f` after `g`.
pub fn comp<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
    where F: Fn(B) -> C,
          G: Fn(A) -> B,
{
    move |a| f(g(a))
}

/// Install a logger for tests that exercise logging code paths.
pub fn init_logger() {
    let _ = pretty_env_logger::try_init();
}

impl<E: Arbitrary, T: Arbitrary> Arbitrary for RemoteData<E, T> {
    fn arbitrary(g: &mut Gen) -> RemoteData<E, T> {
        match u8::arbitrary(g) % 4 {
            0 => RemoteData::Idle,
            1 => RemoteData::Loading,
            2 => RemoteData::Success(T::arbitrary(g)),
            _ => RemoteData::Failure(E::arbitrary(g)),
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = RemoteData<E, T>>> {
        match *self {
            RemoteData::Success(ref data) => Box::new(data.shrink().map(RemoteData::Success)),
            RemoteData::Failure(ref error) => Box::new(error.shrink().map(RemoteData::Failure)),
            RemoteData::Idle | RemoteData::Loading => empty_shrinker(),
        }
    }
}


/// Self-tests.
mod test {
    use quickcheck::{ Arbitrary, Gen };

    use crate::RemoteData;
    use super::{ comp, id };

    #[test]
    fn comp_applies_right_first() {
        let h = comp(|n: i32| n * 10, |n: i32| n + 1);
        assert_eq!(h(2), 30);
        assert_eq!(id(h(0)), 10);
    }

    #[test]
    fn arbitrary_covers_all_states() {
        let mut g = Gen::new(10);
        let mut seen = [false; 4];
        for _ in 0..1000 {
            let rd = RemoteData::<u8, u8>::arbitrary(&mut g);
            let k = match rd {
                RemoteData::Idle => 0,
                RemoteData::Loading => 1,
                RemoteData::Success(_) => 2,
                RemoteData::Failure(_) => 3,
            };
            seen[k] = true;
        }
        assert_eq!(seen, [true; 4]);
    }
}
