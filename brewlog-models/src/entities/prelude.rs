pub use super::{
    bean::Model as BeanModel, brew_session::Model as BrewSessionModel,
    equipment::Model as EquipmentModel, grind_setting::Model as GrindSettingModel,
};
