#![no_std]
#![no_main]

use core::fmt::Write;

use panic_rtt_target as _;
use rtt_target::{rprintln, rtt_init_print};
use stm32f4xx_hal::{
    i2c::{self, I2c},
    pac,
    prelude::*,
};

use st7032_driver::{
    builder::Config,
    error::Error,
    lcd::Lcd,
    sender::I2cSender,
};

fn print_error<E: core::fmt::Debug>(error: &Error<E>) {
    rprintln!("lcd: {}", error);
}

#[cortex_m_rt::entry]
fn main() -> ! {
    rtt_init_print!();

    let dp = pac::Peripherals::take().expect("Cannot take device peripherals");
    let cp = pac::CorePeripherals::take().expect("Cannot take core peripherals");

    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.use_hse(12.MHz()).freeze();

    let mut delayer = cp.SYST.delay(&clocks);

    let gpiob = dp.GPIOB.split();

    let mut i2c = I2c::new(
        dp.I2C1,
        (gpiob.pb6, gpiob.pb7),
        i2c::Mode::standard(100.kHz()),
        &clocks,
    );

    let mut sender = I2cSender::new(&mut i2c);

    let mut lcd = Lcd::new(&mut sender, &mut delayer, Config::default());
    lcd.set_error_hook(print_error);

    // init ST7032
    lcd.begin();

    lcd.put_string("hello,");
    lcd.set_cursor(0x40);
    lcd.put_string("world!");

    lcd.delay_ms(1_000);

    // sweep contrast up and back to default
    (0x10..=0x2F).for_each(|level| {
        lcd.set_contrast(level);
        lcd.delay_ms(50);
    });
    lcd.set_contrast(0x1F);

    // longer than one buffer, only the first 19 bytes show up
    lcd.clear();
    lcd.put_string("this line is too long for the display");

    lcd.delay_ms(1_000);

    // formatted output through core::fmt::Write
    lcd.clear();
    let mut counter: u32 = 0;
    loop {
        lcd.set_cursor(0x00);
        write!(lcd, "count {:>6}", counter).ok();

        lcd.delay_ms(500);
        counter = counter.wrapping_add(1);

        if counter % 10 == 0 {
            lcd.display_off();
            lcd.delay_ms(250);
            lcd.display_on();
        }

        if lcd.reported_count() > 0 && counter % 100 == 0 {
            rprintln!("lcd conditions reported so far: {}", lcd.reported_count());
        }
    }
}
