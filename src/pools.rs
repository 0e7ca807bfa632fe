use crate::display::Rgb;
use crate::engine::pool::PoolItem;

pub static RAINBOW_COLORS: [PoolItem; 7] = [
    PoolItem::swatch("Red", Rgb { r: 255, g: 59, b: 48 }),
    PoolItem::swatch("Orange", Rgb { r: 255, g: 149, b: 0 }),
    PoolItem::swatch("Yellow", Rgb { r: 255, g: 204, b: 0 }),
    PoolItem::swatch("Green", Rgb { r: 52, g: 199, b: 89 }),
    PoolItem::swatch("Blue", Rgb { r: 0, g: 122, b: 255 }),
    PoolItem::swatch("Indigo", Rgb { r: 74, g: 0, b: 130 }),
    PoolItem::swatch("Violet", Rgb { r: 175, g: 82, b: 222 }),
];

pub static QUESTION_ITEMS: [PoolItem; 35] = [
    PoolItem::new("Elephant", "🐘"),
    PoolItem::new("Penguin", "🐧"),
    PoolItem::new("Butterfly", "🦋"),
    PoolItem::new("Shark", "🦈"),
    PoolItem::new("Kangaroo", "🦘"),
    PoolItem::new("Owl", "🦉"),
    PoolItem::new("Dolphin", "🐬"),
    PoolItem::new("Tiger", "🐅"),
    PoolItem::new("Hamster", "🐹"),
    PoolItem::new("Octopus", "🐙"),
    PoolItem::new("Giraffe", "🦒"),
    PoolItem::new("Bee", "🐝"),
    PoolItem::new("Turtle", "🐢"),
    PoolItem::new("Eagle", "🦅"),
    PoolItem::new("Frog", "🐸"),
    PoolItem::new("Horse", "🐴"),
    PoolItem::new("Spider", "🕷️"),
    PoolItem::new("Whale", "🐳"),
    PoolItem::new("Rabbit", "🐰"),
    PoolItem::new("Snake", "🐍"),
    PoolItem::new("Pizza", "🍕"),
    PoolItem::new("Ice cream", "🍨"),
    PoolItem::new("Banana", "🍌"),
    PoolItem::new("Chocolate", "🍫"),
    PoolItem::new("Coffee", "☕"),
    PoolItem::new("Sandwich", "🥪"),
    PoolItem::new("Apple", "🍎"),
    PoolItem::new("Pasta", "🍝"),
    PoolItem::new("Cookies", "🍪"),
    PoolItem::new("Orange juice", "🥤"),
    PoolItem::new("Cheese", "🧀"),
    PoolItem::new("Popcorn", "🍿"),
    PoolItem::new("Hamburger", "🍔"),
    PoolItem::new("Cake", "🍰"),
    PoolItem::new("Milk", "🥛"),
];

pub static SPOTTING_ITEMS: [PoolItem; 15] = [
    PoolItem::new("Bus", "🚌"),
    PoolItem::new("Roundabout", "🔄"),
    PoolItem::new("Sheep", "🐑"),
    PoolItem::new("Church", "⛪"),
    PoolItem::new("Postbox", "📮"),
    PoolItem::new("Boat", "⛵"),
    PoolItem::new("Train", "🚂"),
    PoolItem::new("Bridge", "🌉"),
    PoolItem::new("Castle", "🏰"),
    PoolItem::new("Windmill", "🌬️"),
    PoolItem::new("Horse", "🐴"),
    PoolItem::new("Telephone box", "☎️"),
    PoolItem::new("Motorway services", "⛽"),
    PoolItem::new("Speed camera", "📷"),
    PoolItem::new("Blue plaque", "🔵"),
];

pub static PHRASES: [PoolItem; 11] = [
    PoolItem::plain("Road trip"),
    PoolItem::plain("Pack your bags"),
    PoolItem::plain("Lets go to the beach"),
    PoolItem::plain("Mountain biking"),
    PoolItem::plain("City break"),
    PoolItem::plain("Swimming pool"),
    PoolItem::plain("Airport terminal"),
    PoolItem::plain("Train station"),
    PoolItem::plain("Theme park"),
    PoolItem::plain("Rollercoaster"),
    PoolItem::plain("Museum"),
];
