//! Fixed wording of estimate lines.

pub const STEEL_WORK: &str =
    "Монтаж трубопроводов из стальных оцинкованных труб и запорно-регулировочной арматуры";
pub const PEX_WORK: &str = "Монтаж разводящих трубопроводов из сшитого полиэтилена";
pub const INSULATION_WORK: &str =
    "Теплоизоляция трубопровода цилиндрами из вспененного полиэтилена (каучука) до Дн 100 мм";
pub const SLEEVE_WORK: &str = "Монтаж гильз";
pub const END_NODE_WORK: &str = "Монтаж узла концевого";
pub const METER_WORK: &str = "Установка счётчиков воды Ду 15";
pub const COLLECTOR_WORK: &str = "Монтаж коллектора (распределительной гребенки)";
pub const COLLECTOR_COMBINED_WORK: &str = "Монтаж коллектора (распределительной гребенки) ХВС/ГВС";
pub const RENTAL_NODE_WORK: &str = "Монтаж водомерного узла (Аренда)";
pub const IVPT_WORK: &str = "Установка устройств внутриквартирного пожаротушения";
pub const IVPT_VALVE_WORK: &str = "Установка кранов шаровых Ду 15 (ИВПТ)";
pub const COMPENSATOR_SMALL_WORK: &str = "Монтаж компенсатора сильфонного диаметром до 50мм";
pub const COMPENSATOR_BIG_WORK: &str = "Монтаж компенсатора сильфонного диаметром до 100мм";
pub const SUPPORT_WORK: &str = "Монтаж неподвижных опор";
pub const COMMISSIONING_WORK: &str = "Пусконаладочные работы";

pub const IVPT_DEVICE: &str = "Устройство внутриквартирного пожаротушения";
pub const IVPT_VALVE: &str = "Кран шаровой Ду 15 (ИВПТ)";
pub const AIR_VENT: &str = "Автоматический воздухоотводчик Ду 15";
pub const BALL_VALVE_15: &str = "Кран шаровый Ду 15";

/// Valves and fittings installed with every rental metering node.
pub const RENTAL_NODE_MATERIALS: [&str; 4] = [
    BALL_VALVE_15,
    "Клапан обратный Ду 15",
    "Фильтр сетчатый косой Ду 15",
    "Регулятор давления Ду 15",
];

/// Binding of one collector assembly.
pub const COLLECTOR_BINDING: [&str; 6] = [
    "Кран шаровый Ду 32",
    BALL_VALVE_15,
    "Фильтр сетчатый косой Ду 32",
    "Регулятор давления Ду 32",
    "Манометр",
    "Кран сливной Ду 15",
];
