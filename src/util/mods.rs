/// Inspection of legacy mod bitflags.
///
/// See [https://github.com/ppy/osu-api/wiki#mods](https://github.com/ppy/osu-api/wiki#mods)
pub trait Mods: Copy {
    const NF: u32 = 1 << 0;
    const EZ: u32 = 1 << 1;
    const TD: u32 = 1 << 2;
    const HD: u32 = 1 << 3;
    const HR: u32 = 1 << 4;
    const DT: u32 = 1 << 6;
    const RX: u32 = 1 << 7;
    const HT: u32 = 1 << 8;
    const NC: u32 = 1 << 9;
    const FL: u32 = 1 << 10;
    const SO: u32 = 1 << 12;

    fn nf(self) -> bool;
    fn ez(self) -> bool;
    fn td(self) -> bool;
    fn hd(self) -> bool;
    fn hr(self) -> bool;
    fn dt(self) -> bool;
    fn rx(self) -> bool;
    fn ht(self) -> bool;
    fn nc(self) -> bool;
    fn fl(self) -> bool;
    fn so(self) -> bool;

    /// Product of the clock rates of all speed-changing mods.
    ///
    /// NC implies DT so it is only counted once.
    fn clock_rate(self) -> f64 {
        let mut clock_rate = 1.0;

        if self.dt() || self.nc() {
            clock_rate *= 1.5;
        }

        if self.ht() {
            clock_rate *= 0.75;
        }

        clock_rate
    }

    fn od_ar_hp_multiplier(self) -> f64 {
        if self.hr() {
            1.4
        } else if self.ez() {
            0.5
        } else {
            1.0
        }
    }
}

macro_rules! impl_mods_fn {
    ( $fn_name:ident, $bits:ident ) => {
        fn $fn_name(self) -> bool {
            self & Self::$bits != 0
        }
    };
}

impl Mods for u32 {
    impl_mods_fn!(nf, NF);
    impl_mods_fn!(ez, EZ);
    impl_mods_fn!(td, TD);
    impl_mods_fn!(hd, HD);
    impl_mods_fn!(hr, HR);
    impl_mods_fn!(dt, DT);
    impl_mods_fn!(rx, RX);
    impl_mods_fn!(ht, HT);
    impl_mods_fn!(nc, NC);
    impl_mods_fn!(fl, FL);
    impl_mods_fn!(so, SO);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_mods_multiply() {
        assert!((0_u32.clock_rate() - 1.0).abs() < f64::EPSILON);
        assert!((u32::DT.clock_rate() - 1.5).abs() < f64::EPSILON);
        assert!(((u32::DT | u32::NC).clock_rate() - 1.5).abs() < f64::EPSILON);
        assert!((u32::HT.clock_rate() - 0.75).abs() < f64::EPSILON);
        assert!(((u32::DT | u32::HT).clock_rate() - 1.125).abs() < f64::EPSILON);
    }

    #[test]
    fn hr_takes_precedence_over_ez() {
        assert!(((u32::HR | u32::EZ).od_ar_hp_multiplier() - 1.4).abs() < f64::EPSILON);
        assert!((u32::EZ.od_ar_hp_multiplier() - 0.5).abs() < f64::EPSILON);
    }
}
